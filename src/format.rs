//! Presentation Helpers
//!
//! Labels, colours, image URLs and route links shared by the pages.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::PortalConfig;
use crate::models::{Course, Material};

/// Same unreserved set as `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Card accent colours, cycled by position
pub const CARD_PALETTE: [&str; 5] = ["#ef4444", "#f59e0b", "#22c55e", "#3b82f6", "#8b5cf6"];

pub const DEFAULT_COURSE_COLOR: &str = "#3b82f6";
pub const DEFAULT_ADMIN_COURSE_COLOR: &str = "#3182ce";

pub fn palette_color(index: usize) -> &'static str {
    CARD_PALETTE[index % CARD_PALETTE.len()]
}

pub fn year_label(year: u8) -> String {
    match year {
        1 => "1st Year".to_string(),
        2 => "2nd Year".to_string(),
        3 => "3rd Year".to_string(),
        4 => "4th Year".to_string(),
        n => format!("{} Year", n),
    }
}

pub fn semester_label(semester: u8) -> &'static str {
    if semester == 1 {
        "1st Sem"
    } else {
        "2nd Sem"
    }
}

/// Darken (negative) or lighten a `#rgb`/`#rrggbb` colour.
/// Unparseable input is returned unchanged.
pub fn adjust_brightness(color: &str, amount: i32) -> String {
    let hex = color.trim().trim_start_matches('#');
    let hex: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };
    let Ok(value) = u32::from_str_radix(&hex, 16) else {
        return color.to_string();
    };
    if hex.len() != 6 {
        return color.to_string();
    }

    let channel = |shift: u32| (((value >> shift) & 0xff) as i32 + amount).clamp(0, 255) as u32;
    let (r, g, b) = (channel(16), channel(8), channel(0));
    format!("#{:06x}", (r << 16) | (g << 8) | b)
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Image for the student-facing carousel: remote URLs are forced to https,
/// stored paths resolve under the backend's uploads directory.
pub fn course_image_url(config: &PortalConfig, image: Option<&str>) -> String {
    let image = image.unwrap_or("").trim();
    if image.starts_with("http") {
        return image.replacen("http://", "https://", 1);
    }
    let file = image
        .strip_prefix("uploads/")
        .or_else(|| image.strip_prefix("uploads\\"))
        .unwrap_or(image);
    let file = file.strip_prefix('/').unwrap_or(file);
    if file.is_empty() {
        config.placeholder_image.clone()
    } else {
        config.upload_url(file)
    }
}

/// Image for the admin course banner. The admin API may hand back raw
/// base64 image data instead of a URL.
pub fn admin_course_image(image: &str) -> Option<String> {
    let image = image.trim();
    if image.is_empty() {
        return None;
    }
    let image = image.replacen("uploads/", "", 1);
    if image.starts_with("http") || image.starts_with("data:image") {
        Some(image)
    } else {
        Some(format!("data:image/jpeg;base64,{}", image))
    }
}

/// Profile photos are either absolute (cloud storage) or upload file names
pub fn profile_image_url(config: &PortalConfig, image: &str) -> String {
    if image.starts_with("http") {
        image.to_string()
    } else {
        config.upload_url(image)
    }
}

pub fn material_url(config: &PortalConfig, material: &Material) -> String {
    if material.file_path.starts_with("http") {
        material.file_path.clone()
    } else {
        config.upload_url(&material.file_path)
    }
}

/// Inline styles for a carousel slide: (card, page background)
pub fn slide_styles(config: &PortalConfig, course: &Course) -> (String, String) {
    let color = course_color(course);
    let url = course_image_url(config, course.image.as_deref());
    let card = format!(
        "background-color: {}; background-image: linear-gradient(to bottom, rgba(0,0,0,0) 50%, rgba(0,0,0,0.9) 100%), url('{}'); background-size: cover; background-position: center;",
        color, url
    );
    let background = format!(
        "background-color: #000; background-image: linear-gradient(to right, rgba(0,0,0,0.9) 0%, rgba(0,0,0,0.4) 100%), url('{}'); background-size: cover; background-position: center;",
        url
    );
    (card, background)
}

pub fn course_color(course: &Course) -> String {
    course
        .theme_color
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_COURSE_COLOR.to_string())
}

// ========================
// Route Links
// ========================

pub fn dashboard_href(course_id: &str) -> String {
    format!("/dashboard?course={}", encode_component(course_id))
}

pub fn roadmap_href(code: &str, title: &str) -> String {
    format!(
        "/roadmap?id={}&title={}",
        encode_component(code),
        encode_component(title)
    )
}

pub fn subject_href(code: &str, title: &str, module_id: i64, module_title: &str) -> String {
    format!(
        "/subject?id={}&title={}&moduleId={}&moduleTitle={}",
        encode_component(code),
        encode_component(title),
        module_id,
        encode_component(module_title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PortalConfig {
        PortalConfig::from_override(r#"{"apiBase":"http://localhost:8080"}"#).unwrap()
    }

    #[test]
    fn test_year_and_semester_labels() {
        assert_eq!(year_label(1), "1st Year");
        assert_eq!(year_label(4), "4th Year");
        assert_eq!(year_label(5), "5 Year");
        assert_eq!(semester_label(1), "1st Sem");
        assert_eq!(semester_label(2), "2nd Sem");
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), "#ef4444");
        assert_eq!(palette_color(5), "#ef4444");
        assert_eq!(palette_color(8), "#3b82f6");
    }

    #[test]
    fn test_adjust_brightness_clamps_and_pads() {
        assert_eq!(adjust_brightness("#3b82f6", -50), "#0950c4");
        assert_eq!(adjust_brightness("#000000", -50), "#000000");
        assert_eq!(adjust_brightness("#ffffff", 50), "#ffffff");
        assert_eq!(adjust_brightness("#fff", -255), "#000000");
        assert_eq!(adjust_brightness("#102030", 0).len(), 7);
    }

    #[test]
    fn test_adjust_brightness_rejects_garbage() {
        assert_eq!(adjust_brightness("teal", 10), "teal");
        assert_eq!(adjust_brightness("#12345", 10), "#12345");
    }

    #[test]
    fn test_course_image_url() {
        let config = config();
        assert_eq!(
            course_image_url(&config, Some("http://res.cloudinary.com/x.png")),
            "https://res.cloudinary.com/x.png"
        );
        assert_eq!(
            course_image_url(&config, Some("uploads/bsit.png")),
            "http://localhost:8080/uploads/bsit.png"
        );
        assert_eq!(
            course_image_url(&config, Some("/bsit.png")),
            "http://localhost:8080/uploads/bsit.png"
        );
        assert_eq!(course_image_url(&config, None), config.placeholder_image);
        assert_eq!(course_image_url(&config, Some("")), config.placeholder_image);
    }

    #[test]
    fn test_admin_course_image() {
        assert_eq!(admin_course_image(""), None);
        assert_eq!(
            admin_course_image("https://cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(
            admin_course_image("data:image/png;base64,AAAA").as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert_eq!(
            admin_course_image("uploads/QUJD").as_deref(),
            Some("data:image/jpeg;base64,QUJD")
        );
    }

    #[test]
    fn test_material_url() {
        let config = config();
        let local = Material { file_path: "week1.pdf".into(), ..Default::default() };
        assert_eq!(material_url(&config, &local), "http://localhost:8080/uploads/week1.pdf");
        let remote = Material { file_path: "https://forms.example.com/q".into(), ..Default::default() };
        assert_eq!(material_url(&config, &remote), "https://forms.example.com/q");
    }

    #[test]
    fn test_links_are_encoded() {
        assert_eq!(
            roadmap_href("CC102", "Programming 1 & 2"),
            "/roadmap?id=CC102&title=Programming%201%20%26%202"
        );
        assert_eq!(
            subject_href("CC102", "Prog", 17, "Intro (Part 1)"),
            "/subject?id=CC102&title=Prog&moduleId=17&moduleTitle=Intro%20(Part%201)"
        );
        assert_eq!(dashboard_href("BSIT"), "/dashboard?course=BSIT");
    }

    #[test]
    fn test_course_color_default() {
        let course = Course { id: "BSIT".into(), theme_color: Some(" ".into()), ..Default::default() };
        assert_eq!(course_color(&course), DEFAULT_COURSE_COLOR);
    }
}
