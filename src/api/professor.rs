//! Professor Endpoints
//!
//! Stats, quizzes, lessons, modules and uploads under `/api/professor`.

use reqwest::multipart::Form;
use serde::Serialize;

use super::{file_part, read_json, Api};
use crate::error::ApiResult;
use crate::format::encode_component;
use crate::models::{Material, Module, ProfessorStats, Quiz, Subject};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuiz {
    pub subject_code: String,
    pub module_id: Option<i64>,
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModule {
    pub subject_code: String,
    pub module_number: i32,
    pub title: String,
    pub description: String,
    pub status: String,
}

impl NewModule {
    /// Module created inline from the upload form
    pub fn from_upload(subject_code: &str, module_number: i32, title: &str) -> Self {
        Self {
            subject_code: subject_code.to_string(),
            module_number,
            title: title.trim().to_string(),
            description: "Created via Upload".to_string(),
            status: "active".to_string(),
        }
    }
}

/// Lesson upload; sent as multipart
#[derive(Debug, Clone)]
pub struct LessonUpload {
    pub title: String,
    pub subject_code: String,
    pub module_id: Option<i64>,
}

fn course_query(course_id: Option<&str>) -> String {
    encode_component(course_id.unwrap_or(""))
}

// ========================
// Commands
// ========================

impl Api {
    pub async fn professor_stats(&self, course_id: Option<&str>) -> ApiResult<ProfessorStats> {
        self.get_json(&format!("/api/professor/stats?courseId={}", course_query(course_id)))
            .await
    }

    pub async fn professor_subjects(&self, course_id: &str) -> ApiResult<Vec<Subject>> {
        self.get_json(&format!("/api/professor/subjects?courseId={}", encode_component(course_id)))
            .await
    }

    pub async fn list_quizzes(&self) -> ApiResult<Vec<Quiz>> {
        self.get_json("/api/professor/quizzes").await
    }

    pub async fn create_quiz(&self, quiz: &NewQuiz) -> ApiResult<()> {
        self.post_json("/api/professor/quizzes", quiz).await.map(|_| ())
    }

    pub async fn delete_quiz(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/api/professor/quizzes/{}", id)).await
    }

    pub async fn list_lessons(&self, course_id: Option<&str>) -> ApiResult<Vec<Material>> {
        self.get_json(&format!("/api/professor/materials?courseId={}", course_query(course_id)))
            .await
    }

    pub async fn delete_lesson(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/api/professor/materials/{}", id)).await
    }

    pub async fn create_module(&self, module: &NewModule) -> ApiResult<Module> {
        let resp = self.post_json("/api/professor/modules", module).await?;
        read_json(resp).await
    }

    pub async fn delete_module(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/api/professor/modules/{}", id)).await
    }

    pub async fn upload_lesson(&self, lesson: &LessonUpload, file: &web_sys::File) -> ApiResult<()> {
        let mut form = Form::new()
            .part("file", file_part(file).await?)
            .text("title", lesson.title.clone())
            .text("subjectCode", lesson.subject_code.clone());
        if let Some(module_id) = lesson.module_id {
            form = form.text("moduleId", module_id.to_string());
        }
        self.post_form("/api/professor/upload", form).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_module_from_upload() {
        let module = NewModule::from_upload("CC102", 3, "  Loops ");
        let json = serde_json::to_value(&module).unwrap();
        assert_eq!(json["subjectCode"], "CC102");
        assert_eq!(json["moduleNumber"], 3);
        assert_eq!(json["title"], "Loops");
        assert_eq!(json["description"], "Created via Upload");
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn test_new_quiz_wire_shape() {
        let quiz = NewQuiz {
            subject_code: "CC101".into(),
            module_id: None,
            title: "Prelim".into(),
            link: "https://forms.example.com/prelim".into(),
        };
        let json = serde_json::to_value(&quiz).unwrap();
        assert!(json["moduleId"].is_null());
        assert_eq!(json["link"], "https://forms.example.com/prelim");
    }

    #[test]
    fn test_missing_course_is_empty_query() {
        assert_eq!(course_query(None), "");
        assert_eq!(course_query(Some("BS IT")), "BS%20IT");
    }
}
