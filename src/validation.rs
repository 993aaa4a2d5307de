//! Form payload validation.
//!
//! Draft types mirror what the admin forms submit. A draft is validated
//! first and only then promoted into a record, so a record in `models`
//! always came through the rules here (or from the API, which applies the
//! same ones server-side).

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{
    Ad, Course, Enrollment, EnrollmentStatus, PolicyKind, SitePolicy, ThemeSettings,
};
use crate::presentation::{ColorsInput, StyleConfig, TemplateCategory};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern compiles")
});

static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern compiles"));

/// Accepts `#RGB`/`#RRGGBB` hex values or CSS named colors.
fn validate_color(value: &str) -> Result<(), ValidationError> {
    let named = !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic());
    if HEX_COLOR.is_match(value) || named {
        Ok(())
    } else {
        Err(ValidationError::new("color").with_message("expected a hex or named color".into()))
    }
}

fn validate_slug(value: &str) -> Result<(), ValidationError> {
    if SLUG.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("slug").with_message("expected a kebab-case slug".into()))
    }
}

/// What the ad form submits.
#[derive(Debug, Deserialize, Validate)]
pub struct AdDraft {
    #[validate(length(min = 3, max = 80, message = "title must be 3-80 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 240, message = "description is capped at 240 characters"))]
    pub description: String,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: String,
    #[validate(url(message = "link must be a valid URL"))]
    pub link: String,
    /// Raw template tag; unknown tags are accepted and fall back to the
    /// default category at render time.
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub gradient_colors: Option<ColorsInput>,
    #[serde(default)]
    #[validate(custom(function = validate_color))]
    pub badge_color: Option<String>,
    #[serde(default)]
    #[validate(custom(function = validate_color))]
    pub text_color: Option<String>,
    #[serde(default)]
    pub active: bool,
}

impl AdDraft {
    /// Promotes a validated draft into a new ad record.
    pub fn into_record(self) -> Ad {
        let mut style = StyleConfig {
            gradient_colors: self.gradient_colors,
            ..StyleConfig::default()
        };
        if let Some(color) = self.badge_color {
            style.badge_color = color;
        }
        if let Some(color) = self.text_color {
            style.text_color = color;
        }

        Ad {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            link: self.link,
            template: TemplateCategory::from_tag(&self.template),
            style,
            active: self.active,
            starts_at: None,
            ends_at: None,
            created_at: Utc::now(),
        }
    }
}

/// What the course form submits.
#[derive(Debug, Deserialize, Validate)]
pub struct CourseDraft {
    #[validate(length(min = 3, max = 120, message = "title must be 3-120 characters"))]
    pub title: String,
    #[validate(custom(function = validate_slug))]
    pub slug: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "description is capped at 2000 characters"))]
    pub description: String,
    #[validate(range(min = 0, max = 1_000_000, message = "price must be 0-1000000 cents"))]
    pub price_cents: i64,
    #[serde(default)]
    #[validate(length(max = 40))]
    pub category: String,
    #[serde(default)]
    #[validate(url(message = "thumbnail_url must be a valid URL"))]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub published: bool,
}

impl CourseDraft {
    /// Promotes a validated draft into a new course record.
    pub fn into_record(self) -> Course {
        Course {
            id: Uuid::new_v4(),
            title: self.title,
            slug: self.slug,
            description: self.description,
            price_cents: self.price_cents,
            category: self.category,
            thumbnail_url: self.thumbnail_url,
            published: self.published,
            created_at: Utc::now(),
        }
    }
}

/// What the enrollment form submits.
#[derive(Debug, Deserialize, Validate)]
pub struct EnrollmentDraft {
    pub course_id: Uuid,
    #[validate(length(min = 1, max = 120, message = "student name is required"))]
    pub student_name: String,
    #[validate(email(message = "student_email must be a valid address"))]
    pub student_email: String,
}

impl EnrollmentDraft {
    /// Promotes a validated draft into a new pending enrollment.
    pub fn into_record(self) -> Enrollment {
        Enrollment {
            id: Uuid::new_v4(),
            course_id: self.course_id,
            student_name: self.student_name,
            student_email: self.student_email,
            status: EnrollmentStatus::Pending,
            enrolled_at: Utc::now(),
        }
    }
}

/// What the policy editor submits.
#[derive(Debug, Deserialize, Validate)]
pub struct PolicyDraft {
    pub kind: PolicyKind,
    #[validate(length(min = 3, max = 120, message = "title must be 3-120 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "policy body must not be empty"))]
    pub body_html: String,
}

impl PolicyDraft {
    /// Promotes a validated draft into a policy record.
    pub fn into_record(self) -> SitePolicy {
        SitePolicy {
            id: Uuid::new_v4(),
            kind: self.kind,
            title: self.title,
            body_html: self.body_html,
            updated_at: Utc::now(),
        }
    }
}

/// What the theme settings screen submits.
#[derive(Debug, Deserialize, Validate)]
pub struct ThemeDraft {
    #[validate(custom(function = validate_color))]
    pub primary_color: String,
    #[validate(custom(function = validate_color))]
    pub secondary_color: String,
    #[validate(custom(function = validate_color))]
    pub accent_color: String,
    #[serde(default)]
    pub dark_mode: bool,
    #[validate(length(min = 1, max = 60, message = "font family is required"))]
    pub font_family: String,
}

impl ThemeDraft {
    /// Promotes a validated draft into theme settings.
    pub fn into_record(self) -> ThemeSettings {
        ThemeSettings {
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            accent_color: self.accent_color,
            dark_mode: self.dark_mode,
            font_family: self.font_family,
        }
    }
}
