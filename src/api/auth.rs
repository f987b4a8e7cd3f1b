//! Auth Endpoints
//!
//! Login and profile updates under `/api/auth`.

use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use super::{file_part, read_json, Api};
use crate::error::{ApiError, ApiResult};
use crate::models::User;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

/// Only the fields that changed are sent
#[derive(Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// Diff the form against the session user
    pub fn from_form(current: &User, username: &str, password: &str) -> Self {
        let username = username.trim();
        Self {
            username: (!username.is_empty() && username != current.username).then(|| username.to_string()),
            password: (!password.is_empty()).then(|| password.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUpload {
    pub image: String,
    #[serde(default)]
    pub message: Option<String>,
}

// ========================
// Commands
// ========================

impl Api {
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<User> {
        let resp = self
            .post_json("/api/auth/login", &LoginArgs { username, password })
            .await
            .map_err(|e| match e.status() {
                Some(401) => ApiError::Status {
                    status: 401,
                    message: "Invalid username or password".to_string(),
                },
                _ => e,
            })?;
        read_json(resp).await
    }

    pub async fn update_profile(&self, user_id: i64, update: &ProfileUpdate) -> ApiResult<User> {
        let resp = self.put_json(&format!("/api/auth/users/{}", user_id), update).await?;
        read_json(resp).await
    }

    pub async fn upload_photo(&self, user_id: i64, file: &web_sys::File) -> ApiResult<PhotoUpload> {
        let form = Form::new().part("file", file_part(file).await?);
        let resp = self.post_form(&format!("/api/auth/users/{}/photo", user_id), form).await?;
        read_json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User { id: 3, username: "ana".into(), role: "student".into(), ..Default::default() }
    }

    #[test]
    fn test_unchanged_form_is_empty() {
        let update = ProfileUpdate::from_form(&user(), " ana ", "");
        assert!(update.is_empty());
        assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
    }

    #[test]
    fn test_only_changed_fields_are_sent() {
        let update = ProfileUpdate::from_form(&user(), "ana.cruz", "");
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"username":"ana.cruz"}"#);

        let update = ProfileUpdate::from_form(&user(), "ana", "n3w-pass");
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"password":"n3w-pass"}"#);
    }

    #[test]
    fn test_photo_upload_response() {
        let upload: PhotoUpload =
            serde_json::from_str(r#"{"message":"Upload successful","image":"https://cdn/x.png"}"#).unwrap();
        assert_eq!(upload.image, "https://cdn/x.png");
    }
}
