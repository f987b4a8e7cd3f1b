//! Catalog Endpoints
//!
//! Read-only course, subject, module and material lookups used by the
//! student pages.

use super::Api;
use crate::error::ApiResult;
use crate::format::encode_component;
use crate::models::{Course, Material, Module, Subject};

impl Api {
    /// All courses, as shown on the home carousel
    pub async fn list_courses(&self) -> ApiResult<Vec<Course>> {
        self.get_json("/api/admin/courses").await
    }

    pub async fn get_course(&self, course_id: &str) -> ApiResult<Course> {
        self.get_json(&format!("/api/courses/{}", encode_component(course_id))).await
    }

    pub async fn course_subjects(&self, course_id: &str) -> ApiResult<Vec<Subject>> {
        self.get_json(&format!("/api/courses/{}/subjects", encode_component(course_id)))
            .await
    }

    pub async fn subject_modules(&self, subject_code: &str) -> ApiResult<Vec<Module>> {
        self.get_json(&format!(
            "/api/admin/modules?subjectCode={}",
            encode_component(subject_code)
        ))
        .await
    }

    pub async fn student_materials(&self, subject_code: &str, module_id: Option<&str>) -> ApiResult<Vec<Material>> {
        let mut path = format!("/api/student/materials?subjectCode={}", encode_component(subject_code));
        if let Some(module_id) = module_id.filter(|m| !m.is_empty()) {
            path.push_str(&format!("&moduleId={}", encode_component(module_id)));
        }
        self.get_json(&path).await
    }
}
