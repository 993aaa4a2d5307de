//! Records managed by the admin tooling, as they travel over the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presentation::{StyleConfig, TemplateCategory};

/// A promotional ad shown on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    pub link: String,
    #[serde(default)]
    pub template: TemplateCategory,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A course listed on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Cancelled,
}

/// A student's enrollment in a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub course_id: Uuid,
    pub student_name: String,
    pub student_email: String,
    #[serde(default)]
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[display("privacy")]
    Privacy,
    #[display("terms")]
    Terms,
    #[display("refund")]
    Refund,
}

/// A site-wide policy document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitePolicy {
    pub id: Uuid,
    pub kind: PolicyKind,
    pub title: String,
    pub body_html: String,
    pub updated_at: DateTime<Utc>,
}

/// Theme colors and typography picked in the admin settings screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    #[serde(default)]
    pub dark_mode: bool,
    pub font_family: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: "#4f46e5".to_string(),
            secondary_color: "#0ea5e9".to_string(),
            accent_color: "#f59e0b".to_string(),
            dark_mode: false,
            font_family: "Inter".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ColorsInput;

    #[test]
    fn test_ad_deserializes_with_minimal_fields() {
        // The admin API omits optional fields for legacy records; they must
        // fill in with defaults rather than fail the whole listing.
        let raw = r#"{
            "id": "7f6df276-7d06-4fcf-a22e-6cbcdd4e93c9",
            "title": "Summer sale",
            "image_url": "https://cdn.example.com/summer.jpg",
            "link": "https://example.com/sale",
            "created_at": "2026-05-01T10:00:00Z"
        }"#;
        let ad: Ad = serde_json::from_str(raw).expect("minimal ad deserializes");
        assert_eq!(ad.template, TemplateCategory::Default);
        assert!(ad.style.gradient_colors.is_none());
        assert!(!ad.active);
    }

    #[test]
    fn test_ad_style_accepts_array_and_string_gradients() {
        let raw = r##"{
            "id": "7f6df276-7d06-4fcf-a22e-6cbcdd4e93c9",
            "title": "Summer sale",
            "image_url": "https://cdn.example.com/summer.jpg",
            "link": "https://example.com/sale",
            "template": "sale",
            "style": { "gradient_colors": "#f00; #00f" },
            "created_at": "2026-05-01T10:00:00Z"
        }"##;
        let ad: Ad = serde_json::from_str(raw).expect("ad with delimited gradient deserializes");
        assert_eq!(ad.template, TemplateCategory::Sale);
        assert!(matches!(
            ad.style.gradient_colors,
            Some(ColorsInput::Delimited(_))
        ));
    }

    #[test]
    fn test_enrollment_status_defaults_to_pending() {
        let raw = r#"{
            "id": "c1a7c0de-0000-4000-8000-000000000001",
            "course_id": "c1a7c0de-0000-4000-8000-000000000002",
            "student_name": "Ada Lovelace",
            "student_email": "ada@example.com",
            "enrolled_at": "2026-02-01T09:30:00Z"
        }"#;
        let enrollment: Enrollment = serde_json::from_str(raw).expect("enrollment deserializes");
        assert_eq!(enrollment.status, EnrollmentStatus::Pending);
    }
}
