//! Admin Endpoints
//!
//! User, course, subject and activity-log management under `/api/admin`.

use reqwest::multipart::Form;
use serde::Serialize;

use super::{file_part, read_json, Api};
use crate::error::{ApiError, ApiResult};
use crate::format::encode_component;
use crate::models::{ActivityLog, Course, Role, Subject, User};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
    pub course_id: Option<String>,
}

impl NewUser {
    /// Professors must carry a course; everyone else never does
    pub fn new(username: &str, password: &str, role: Role, course_id: &str) -> ApiResult<Self> {
        let course_id = match role {
            Role::Professor => {
                let course_id = course_id.trim();
                if course_id.is_empty() {
                    return Err(ApiError::Invalid(
                        "Professors must be assigned to a Course/Department.".to_string(),
                    ));
                }
                Some(course_id.to_string())
            }
            _ => None,
        };
        Ok(Self {
            username: username.trim().to_string(),
            password: password.to_string(),
            role: role.as_str().to_string(),
            course_id,
        })
    }
}

/// Course create/edit form; sent as multipart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseForm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub theme_color: String,
}

impl CourseForm {
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            title: course.title.clone(),
            description: course.description.clone().unwrap_or_default(),
            theme_color: course
                .theme_color
                .clone()
                .unwrap_or_else(|| crate::format::DEFAULT_ADMIN_COURSE_COLOR.to_string()),
        }
    }

    fn into_form(self) -> Form {
        Form::new()
            .text("id", self.id)
            .text("title", self.title)
            .text("description", self.description)
            .text("themeColor", self.theme_color)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectForm {
    pub course_id: String,
    pub code: String,
    pub title: String,
    pub year_level: u8,
    pub semester: u8,
    pub status: String,
}

impl SubjectForm {
    /// Blank form for a new subject in `course_id`
    pub fn blank(course_id: &str) -> Self {
        Self {
            course_id: course_id.to_string(),
            year_level: 1,
            semester: 1,
            status: "active".to_string(),
            ..Default::default()
        }
    }

    pub fn from_subject(subject: &Subject) -> Self {
        Self {
            course_id: subject.course_id.clone().unwrap_or_default(),
            code: subject.code.clone(),
            title: subject.title.clone(),
            year_level: subject.year_level.max(1),
            semester: subject.semester.max(1),
            status: subject.status.clone().unwrap_or_else(|| "active".to_string()),
        }
    }
}

// ========================
// Commands
// ========================

impl Api {
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get_json("/api/admin/users").await
    }

    pub async fn create_user(&self, user: &NewUser) -> ApiResult<User> {
        let resp = self.post_json("/api/admin/users", user).await?;
        read_json(resp).await
    }

    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/api/admin/users/{}", id)).await
    }

    /// Create (or update when `editing`) a course, with an optional image
    pub async fn save_course(&self, course: CourseForm, image: Option<&web_sys::File>, editing: bool) -> ApiResult<()> {
        let path = if editing {
            format!("/api/admin/courses/{}", encode_component(&course.id))
        } else {
            "/api/admin/courses".to_string()
        };
        let mut form = course.into_form();
        if let Some(file) = image {
            form = form.part("file", file_part(file).await?);
        }
        if editing {
            self.put_form(&path, form).await?;
        } else {
            self.post_form(&path, form).await?;
        }
        Ok(())
    }

    pub async fn delete_course(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/admin/courses/{}", encode_component(id))).await
    }

    pub async fn list_subjects(&self, course_id: &str) -> ApiResult<Vec<Subject>> {
        self.get_json(&format!("/api/admin/subjects?courseId={}", encode_component(course_id)))
            .await
    }

    pub async fn get_subject(&self, code: &str) -> ApiResult<Subject> {
        self.get_json(&format!("/api/admin/subjects/{}", encode_component(code))).await
    }

    pub async fn save_subject(&self, subject: &SubjectForm, editing: bool) -> ApiResult<()> {
        if editing {
            let path = format!("/api/admin/subjects/{}", encode_component(&subject.code));
            self.put_json(&path, subject).await?;
        } else {
            self.post_json("/api/admin/subjects", subject).await?;
        }
        Ok(())
    }

    pub async fn delete_subject(&self, code: &str) -> ApiResult<()> {
        self.delete(&format!("/api/admin/subjects/{}", encode_component(code))).await
    }

    pub async fn list_logs(&self) -> ApiResult<Vec<ActivityLog>> {
        self.get_json("/api/admin/logs").await
    }
}

/// Admin subject board: subjects bucketed into the four year columns.
/// A missing year level counts as first year.
pub fn subjects_by_year(subjects: &[Subject]) -> [Vec<Subject>; 4] {
    let mut columns: [Vec<Subject>; 4] = Default::default();
    for subject in subjects {
        let year = subject.year_level.clamp(1, 4) as usize;
        columns[year - 1].push(subject.clone());
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professor_requires_course() {
        let err = NewUser::new("prof", "pw", Role::Professor, "  ").unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));

        let user = NewUser::new("prof", "pw", Role::Professor, "BSIT").unwrap();
        assert_eq!(user.course_id.as_deref(), Some("BSIT"));
        assert_eq!(user.role, "professor");
    }

    #[test]
    fn test_non_professor_drops_course() {
        let user = NewUser::new(" stud ", "pw", Role::Student, "BSIT").unwrap();
        assert_eq!(user.username, "stud");
        let json = serde_json::to_value(&user).unwrap();
        assert!(json["courseId"].is_null());
    }

    #[test]
    fn test_subject_form_defaults() {
        let form = SubjectForm::blank("BSIT");
        assert_eq!(form.status, "active");
        assert_eq!(form.year_level, 1);

        let subject = Subject { code: "IT301".into(), year_level: 0, semester: 2, ..Default::default() };
        let form = SubjectForm::from_subject(&subject);
        assert_eq!(form.year_level, 1);
        assert_eq!(form.semester, 2);
        assert_eq!(form.status, "active");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["yearLevel"], 1);
    }

    #[test]
    fn test_subjects_by_year() {
        let subjects = vec![
            Subject { code: "A".into(), year_level: 1, ..Default::default() },
            Subject { code: "B".into(), year_level: 0, ..Default::default() },
            Subject { code: "C".into(), year_level: 3, ..Default::default() },
            Subject { code: "D".into(), year_level: 4, ..Default::default() },
        ];
        let columns = subjects_by_year(&subjects);
        assert_eq!(columns[0].len(), 2);
        assert!(columns[1].is_empty());
        assert_eq!(columns[2][0].code, "C");
        assert_eq!(columns[3][0].code, "D");
    }

    #[test]
    fn test_course_form_from_course() {
        let course = Course { id: "BSIT".into(), title: "IT".into(), ..Default::default() };
        let form = CourseForm::from_course(&course);
        assert_eq!(form.theme_color, "#3182ce");
        assert_eq!(form.description, "");
    }
}
