//! Renders the HTML preview of an ad card.

use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::json;

use crate::error::Error;
use crate::models::{Ad, ThemeSettings};
use crate::presentation::{AdPresentation, PlacementOption, TemplateCategory};
use crate::templates::AD_CARD_TEMPLATE;

static REGISTRY: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut registry = Handlebars::new();
    registry
        .register_template_string("ad_card", AD_CARD_TEMPLATE)
        .expect("embedded ad card template parses");
    registry
});

/// Label shown in the card badge for each category.
fn badge_label(category: TemplateCategory) -> &'static str {
    match category {
        TemplateCategory::Promo => "Limited offer",
        TemplateCategory::NewCourse => "New course",
        TemplateCategory::Sale => "Sale",
        TemplateCategory::Event => "Event",
        TemplateCategory::Default => "Featured",
    }
}

/// CSS value for the card background.
fn gradient_css(colors: &[String]) -> String {
    format!("linear-gradient(135deg, {})", colors.join(", "))
}

/// CSS declarations positioning the decorative graphic.
fn placement_css(placement: &PlacementOption) -> String {
    let mut rules = Vec::with_capacity(6);
    for (edge, offset) in [
        ("top", placement.top),
        ("right", placement.right),
        ("bottom", placement.bottom),
        ("left", placement.left),
    ] {
        if let Some(value) = offset {
            rules.push(format!("{edge}: {value}%"));
        }
    }
    rules.push(format!("width: {}px", placement.size));
    rules.push(format!("height: {}px", placement.size));
    rules.join("; ")
}

/// Renders the standalone preview page for one ad with an already-resolved
/// presentation, styled with the platform theme.
///
/// # Errors
///
/// Returns an error when the template fails to render.
pub fn render_ad_card(
    ad: &Ad,
    presentation: &AdPresentation,
    site_name: &str,
    theme: &ThemeSettings,
) -> Result<String, Error> {
    let data = json!({
        "ad": ad,
        "presentation": presentation,
        "site_name": site_name,
        "theme": theme,
        "badge_label": badge_label(ad.template),
        "gradient_css": gradient_css(&presentation.gradient_colors),
        "placement_css": placement_css(&presentation.placement),
    });
    log::debug!("rendering ad card {} with layout {}", ad.id, presentation.layout.name);
    Ok(REGISTRY.render("ad_card", &data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{self, ColorsInput, StyleConfig};
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_ad() -> Ad {
        Ad {
            id: Uuid::new_v4(),
            title: "Spring cohort enrollment is open".to_string(),
            description: "Save 20% on all live courses until Friday.".to_string(),
            image_url: "https://cdn.example.com/spring.jpg".to_string(),
            link: "https://example.com/courses".to_string(),
            template: TemplateCategory::Sale,
            style: StyleConfig {
                gradient_colors: Some(ColorsInput::Delimited("#7c3aed; #db2777".to_string())),
                ..StyleConfig::default()
            },
            active: true,
            starts_at: None,
            ends_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_includes_resolved_values() {
        let ad = sample_ad();
        let resolved = presentation::resolve(ad.template, &ad.style);
        let theme = ThemeSettings::default();
        let html =
            render_ad_card(&ad, &resolved, "Adboard Academy", &theme).expect("preview renders");

        assert!(html.contains("Spring cohort enrollment is open"));
        assert!(html.contains("linear-gradient(135deg, #7c3aed, #db2777)"));
        assert!(html.contains(resolved.layout.container));
        assert!(html.contains(&format!("data-animation=\"{}\"", resolved.lottie)));
        assert!(html.contains(">Sale</span>"));
        assert!(html.contains("Adboard Academy"));
    }

    #[test]
    fn test_placement_css_emits_only_set_edges() {
        let placement = PlacementOption {
            top: Some(8),
            right: None,
            bottom: None,
            left: Some(4),
            size: 96,
        };
        let css = placement_css(&placement);
        assert_eq!(css, "top: 8%; left: 4%; width: 96px; height: 96px");
    }
}
