//! Frontend Models
//!
//! Data structures matching the backend JSON (camelCase on the wire).
//! Fields the backend may omit or send as null fall back to defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Course (degree programme) such as "BSIT"
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub description: Option<String>,
    pub theme_color: Option<String>,
    pub status: Option<String>,
    pub image: Option<String>,
}

/// Subject within a course, e.g. CC101
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub color: Option<String>,
    pub course_id: Option<String>,
    pub year_level: u8,
    pub semester: u8,
    pub status: Option<String>,
}

impl Subject {
    pub fn is_inactive(&self) -> bool {
        self.status.as_deref() == Some("inactive")
    }
}

/// Named unit within a subject, shown on the roadmap
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Module {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub description: Option<String>,
    pub module_number: i32,
    pub status: Option<String>,
    pub subject_code: Option<String>,
}

impl Module {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }

    /// Badge text: upper-cased status, LOCKED when absent
    pub fn status_label(&self) -> String {
        match self.status.as_deref() {
            Some(s) if !s.is_empty() => s.to_uppercase(),
            _ => "LOCKED".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Video,
    Pdf,
    Ppt,
    Quiz,
    Other,
}

impl MaterialKind {
    /// Tabs on the subject page, in display order
    pub const TABS: [MaterialKind; 4] = [
        MaterialKind::Video,
        MaterialKind::Pdf,
        MaterialKind::Ppt,
        MaterialKind::Quiz,
    ];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "video" => MaterialKind::Video,
            "pdf" => MaterialKind::Pdf,
            "ppt" => MaterialKind::Ppt,
            "quiz" => MaterialKind::Quiz,
            _ => MaterialKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Video => "video",
            MaterialKind::Pdf => "pdf",
            MaterialKind::Ppt => "ppt",
            MaterialKind::Quiz => "quiz",
            MaterialKind::Other => "file",
        }
    }

    /// Accent colour used for the tab underline and card icon
    pub fn accent(&self) -> &'static str {
        match self {
            MaterialKind::Video => "#ef4444",
            MaterialKind::Pdf => "#f59e0b",
            MaterialKind::Ppt => "#22c55e",
            MaterialKind::Quiz => "#3b82f6",
            MaterialKind::Other => "#6b7280",
        }
    }

    pub fn icon_background(&self) -> &'static str {
        match self {
            MaterialKind::Video => "#fee2e2",
            MaterialKind::Pdf => "#fef3c7",
            MaterialKind::Ppt => "#dcfce7",
            MaterialKind::Quiz => "#eff6ff",
            MaterialKind::Other => "#f3f4f6",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            MaterialKind::Video => "fa-video",
            MaterialKind::Pdf => "fa-file-pdf",
            MaterialKind::Ppt => "fa-file-powerpoint",
            MaterialKind::Quiz => "fa-clipboard-question",
            MaterialKind::Other => "fa-file",
        }
    }
}

/// Uploaded lesson asset
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Material {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub file_path: String,
    pub subject_code: Option<String>,
    pub module_id: Option<i64>,
}

impl Material {
    pub fn kind(&self) -> MaterialKind {
        self.kind.as_deref().map(MaterialKind::parse).unwrap_or(MaterialKind::Other)
    }

    /// Table label: upper-cased type, FILE when absent
    pub fn type_label(&self) -> String {
        match self.kind.as_deref() {
            Some(k) if !k.is_empty() => k.to_uppercase(),
            _ => "FILE".to_string(),
        }
    }

    pub fn module_label(&self) -> String {
        match self.module_id {
            Some(id) => format!("Module {}", id),
            None => "Module -".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Professor,
    Admin,
    Unknown,
}

impl Role {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "student" => Role::Student,
            "professor" => Role::Professor,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Professor => "professor",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }

    /// Landing route after login
    pub fn home_route(&self) -> &'static str {
        match self {
            Role::Professor => "/professor",
            Role::Admin => "/admin",
            _ => "/",
        }
    }
}

/// Logged-in user, persisted under the `user` storage key
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    pub course_id: Option<String>,
    pub profile_image: Option<String>,
}

impl User {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quiz {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub subject_code: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub date_created: Option<NaiveDate>,
}

impl Quiz {
    pub fn date_label(&self) -> String {
        self.date_created
            .map(|d| d.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Activity log row; the backend pre-formats the timestamp
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityLog {
    pub id: i64,
    pub username: Option<String>,
    pub action: Option<String>,
    pub role: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessorStats {
    pub students: u64,
    pub subjects: u64,
    pub lessons: u64,
}

/// Entry of the "recently viewed" list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentSubject {
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub year_level: u8,
}

impl From<&Subject> for RecentSubject {
    fn from(subject: &Subject) -> Self {
        Self {
            code: subject.code.clone(),
            title: subject.title.clone(),
            year_level: subject.year_level,
        }
    }
}

/// Treats an explicit JSON null like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts an ISO date string; anything else (null, arrays) becomes None
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_from_backend_json() {
        let json = r#"{"code":"CC101","title":"Intro to Computing","color":null,
            "courseId":"BSIT","yearLevel":1,"semester":2,"status":"inactive"}"#;
        let subject: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(subject.code, "CC101");
        assert_eq!(subject.course_id.as_deref(), Some("BSIT"));
        assert_eq!(subject.year_level, 1);
        assert!(subject.is_inactive());
    }

    #[test]
    fn test_missing_fields_default() {
        let course: Course = serde_json::from_str(r#"{"id":"BSCS"}"#).unwrap();
        assert_eq!(course.id, "BSCS");
        assert_eq!(course.theme_color, None);

        let course: Course = serde_json::from_str(r#"{"id":"BSCS","title":null}"#).unwrap();
        assert_eq!(course.title, "");

        let module: Module = serde_json::from_str(r#"{"id":4,"title":"Loops"}"#).unwrap();
        assert_eq!(module.status_label(), "LOCKED");
        assert!(!module.is_active());
    }

    #[test]
    fn test_user_ignores_password_and_parses_role() {
        let json = r#"{"id":7,"username":"ana","password":"secret","role":"Professor","courseId":"BSIT"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role(), Role::Professor);
        assert_eq!(user.role().home_route(), "/professor");

        let stored = serde_json::to_string(&user).unwrap();
        assert!(!stored.contains("secret"));
        assert!(stored.contains("\"courseId\":\"BSIT\""));
    }

    #[test]
    fn test_material_kind_and_labels() {
        let json = r#"{"id":1,"title":"Week 1","type":"PDF","filePath":"week1.pdf","subjectCode":"CC101"}"#;
        let material: Material = serde_json::from_str(json).unwrap();
        assert_eq!(material.kind(), MaterialKind::Pdf);
        assert_eq!(material.type_label(), "PDF");
        assert_eq!(material.module_label(), "Module -");
    }

    #[test]
    fn test_quiz_date_is_lenient() {
        let quiz: Quiz = serde_json::from_str(r#"{"id":1,"title":"Q1","dateCreated":"2024-03-05"}"#).unwrap();
        assert_eq!(quiz.date_label(), "Mar 05, 2024");

        let quiz: Quiz = serde_json::from_str(r#"{"id":2,"title":"Q2","dateCreated":[2024,3,5]}"#).unwrap();
        assert_eq!(quiz.date_created, None);
        assert_eq!(quiz.date_label(), "-");
    }

    #[test]
    fn test_recent_subject_wire_shape() {
        let recent = RecentSubject { code: "CC102".into(), title: "Programming 1".into(), year_level: 1 };
        let json = serde_json::to_string(&recent).unwrap();
        assert_eq!(json, r#"{"code":"CC102","title":"Programming 1","yearLevel":1}"#);
    }
}
