//! Backend Bindings
//!
//! HTTP wrappers around the portal REST API, organized by area. Every call
//! resolves to `ApiResult<T>`; non-2xx responses become `ApiError::Status`.

mod admin;
mod auth;
mod catalog;
mod professor;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::JsFuture;

use crate::config::PortalConfig;
use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use admin::*;
pub use auth::*;
pub use catalog::*;
pub use professor::*;

/// Handle to the backend; cheap to clone into async tasks
#[derive(Debug, Clone)]
pub struct Api {
    config: PortalConfig,
}

impl Api {
    pub fn new(config: &PortalConfig) -> Self {
        Self { config: config.clone() }
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    // ========================
    // Request Helpers
    // ========================

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = send(Client::new().get(self.url(path))).await?;
        read_json(resp).await
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Response> {
        send(Client::new().post(self.url(path)).json(body)).await
    }

    async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Response> {
        send(Client::new().put(self.url(path)).json(body)).await
    }

    async fn post_form(&self, path: &str, form: Form) -> ApiResult<Response> {
        send(Client::new().post(self.url(path)).multipart(form)).await
    }

    async fn put_form(&self, path: &str, form: Form) -> ApiResult<Response> {
        send(Client::new().put(self.url(path)).multipart(form)).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        send(Client::new().delete(self.url(path))).await.map(|_| ())
    }
}

/// Send and reject non-2xx statuses with the body text as the message
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let resp = request.send().await?;
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), status.canonical_reason(), &body))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a picked file into a multipart part
pub async fn file_part(file: &web_sys::File) -> ApiResult<Part> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Invalid(format!("Could not read {}: {:?}", file.name(), e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let part = Part::bytes(bytes).file_name(file.name());
    let mime = file.type_();
    if mime.is_empty() {
        Ok(part)
    } else {
        Ok(part.mime_str(&mime)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_urls_follow_config() {
        let config = PortalConfig::from_override(r#"{"apiBase":"https://portal.example.edu/"}"#).unwrap();
        let api = Api::new(&config);
        assert_eq!(api.url("/api/courses"), "https://portal.example.edu/api/courses");
        assert_eq!(api.url("/api/courses"), config.api_url("/api/courses"));
    }
}
