//! Picks how a promotional ad card looks when it is rendered.
//!
//! Each ad carries a template category and a per-ad style configuration
//! supplied through the admin form. This module normalizes the style input
//! and selects one of a small fixed set of layout variants, decorative
//! Lottie graphics, and placements for that category. Everything here is
//! total: malformed input resolves to a default rather than an error, so a
//! bad form value can never break a render.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_GRADIENT, GENERIC_ENTRANCE, GRADIENT_DELIMITERS};

/// Visual preset family applied to an ad card.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum TemplateCategory {
    #[display("promo")]
    Promo,
    #[display("newCourse")]
    NewCourse,
    #[display("sale")]
    Sale,
    #[display("event")]
    Event,
    #[default]
    #[display("default")]
    Default,
}

impl TemplateCategory {
    /// Maps a raw tag to its category. Unrecognized tags resolve to
    /// [`TemplateCategory::Default`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "promo" => Self::Promo,
            "newCourse" => Self::NewCourse,
            "sale" => Self::Sale,
            "event" => Self::Event,
            _ => Self::Default,
        }
    }
}

/// Gradient colors as the form supplies them: either an already-split list
/// or a single delimited string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorsInput {
    List(Vec<String>),
    Delimited(String),
}

/// Per-ad customizable colors from the admin form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub gradient_colors: Option<ColorsInput>,
    #[serde(default = "default_badge_color")]
    pub badge_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
}

fn default_badge_color() -> String {
    "#ff5252".to_string()
}

fn default_text_color() -> String {
    "#ffffff".to_string()
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            gradient_colors: None,
            badge_color: default_badge_color(),
            text_color: default_text_color(),
        }
    }
}

/// Fixed bundle of positioning attributes for an ad card's sub-elements.
/// The fields are CSS class fragments consumed by the preview template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutVariant {
    pub name: &'static str,
    pub container: &'static str,
    pub overlay: &'static str,
    pub badge: &'static str,
    pub text: &'static str,
}

/// Position and size of the decorative animated graphic, as percent offsets
/// from the card edges plus a pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacementOption {
    pub top: Option<i16>,
    pub right: Option<i16>,
    pub bottom: Option<i16>,
    pub left: Option<i16>,
    pub size: u16,
}

impl std::fmt::Display for PlacementOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut wrote = false;
        for (edge, offset) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if let Some(value) = offset {
                if wrote {
                    write!(f, ", ")?;
                }
                write!(f, "{edge}: {value}%")?;
                wrote = true;
            }
        }
        if wrote {
            write!(f, ", ")?;
        }
        write!(f, "size: {}px", self.size)
    }
}

/// Normalizes the gradient input into a color list.
///
/// An already-split list passes through untouched. A delimited string is
/// split on `;` or `,`, each piece trimmed, empty pieces dropped. Missing
/// input, or a string with no usable tokens, yields the two-color fallback.
/// Never fails.
pub fn parse_gradient_colors(input: Option<&ColorsInput>) -> Vec<String> {
    match input {
        Some(ColorsInput::List(colors)) => colors.clone(),
        Some(ColorsInput::Delimited(raw)) => {
            let tokens: Vec<String> = raw
                .split(|c: char| GRADIENT_DELIMITERS.contains(&c))
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect();
            if tokens.is_empty() {
                log::debug!("no usable gradient tokens in {raw:?}, using fallback");
                fallback_gradient()
            } else {
                tokens
            }
        }
        None => fallback_gradient(),
    }
}

fn fallback_gradient() -> Vec<String> {
    FALLBACK_GRADIENT.iter().map(|c| (*c).to_string()).collect()
}

/// Picks one element uniformly at random; `None` when the slice is empty.
/// Distribution quality only matters for visual variety.
pub fn pick_random<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}

/// Layout variants available for a category. Every category has at least
/// one entry.
pub fn layout_variants(category: TemplateCategory) -> &'static [LayoutVariant] {
    match category {
        TemplateCategory::Promo => &[
            LayoutVariant {
                name: "promo-split",
                container: "split-right",
                overlay: "overlay-diagonal",
                badge: "badge-top-left",
                text: "text-left",
            },
            LayoutVariant {
                name: "promo-banner",
                container: "banner-wide",
                overlay: "overlay-bottom",
                badge: "badge-top-right",
                text: "text-center",
            },
        ],
        TemplateCategory::NewCourse => &[
            LayoutVariant {
                name: "course-spotlight",
                container: "stack-center",
                overlay: "overlay-radial",
                badge: "badge-top-right",
                text: "text-center",
            },
            LayoutVariant {
                name: "course-ribbon",
                container: "split-left",
                overlay: "overlay-left",
                badge: "badge-ribbon",
                text: "text-right",
            },
        ],
        TemplateCategory::Sale => &[
            LayoutVariant {
                name: "sale-burst",
                container: "stack-center",
                overlay: "overlay-full",
                badge: "badge-center",
                text: "text-center",
            },
            LayoutVariant {
                name: "sale-corner",
                container: "banner-wide",
                overlay: "overlay-diagonal",
                badge: "badge-bottom-right",
                text: "text-left",
            },
        ],
        TemplateCategory::Event => &[
            LayoutVariant {
                name: "event-marquee",
                container: "banner-tall",
                overlay: "overlay-bottom",
                badge: "badge-top-left",
                text: "text-center",
            },
            LayoutVariant {
                name: "event-ticket",
                container: "split-right",
                overlay: "overlay-left",
                badge: "badge-ribbon",
                text: "text-left",
            },
        ],
        TemplateCategory::Default => &[
            LayoutVariant {
                name: "plain-card",
                container: "stack-center",
                overlay: "overlay-none",
                badge: "badge-top-right",
                text: "text-left",
            },
            LayoutVariant {
                name: "plain-banner",
                container: "banner-wide",
                overlay: "overlay-bottom",
                badge: "badge-top-left",
                text: "text-center",
            },
        ],
    }
}

/// Lottie graphic identifiers available for a category.
pub fn lottie_animations(category: TemplateCategory) -> &'static [&'static str] {
    match category {
        TemplateCategory::Promo => &["confetti-burst", "gift-box"],
        TemplateCategory::NewCourse => &["graduation-cap", "open-book", "rocket-launch"],
        TemplateCategory::Sale => &["discount-tag", "flash-spark"],
        TemplateCategory::Event => &["calendar-flip", "megaphone"],
        TemplateCategory::Default => &["floating-shapes"],
    }
}

/// Placements available for the decorative graphic of a category. Every
/// category has at least one entry.
pub fn placements(category: TemplateCategory) -> &'static [PlacementOption] {
    match category {
        TemplateCategory::Promo => &[
            PlacementOption {
                top: Some(8),
                right: Some(6),
                bottom: None,
                left: None,
                size: 96,
            },
            PlacementOption {
                top: None,
                right: None,
                bottom: Some(10),
                left: Some(6),
                size: 72,
            },
        ],
        TemplateCategory::NewCourse => &[
            PlacementOption {
                top: Some(12),
                right: None,
                bottom: None,
                left: Some(8),
                size: 88,
            },
            PlacementOption {
                top: None,
                right: Some(10),
                bottom: Some(8),
                left: None,
                size: 64,
            },
        ],
        TemplateCategory::Sale => &[
            PlacementOption {
                top: Some(6),
                right: Some(4),
                bottom: None,
                left: None,
                size: 112,
            },
            PlacementOption {
                top: None,
                right: None,
                bottom: Some(6),
                left: Some(4),
                size: 80,
            },
        ],
        TemplateCategory::Event => &[
            PlacementOption {
                top: Some(10),
                right: Some(10),
                bottom: None,
                left: None,
                size: 84,
            },
            PlacementOption {
                top: None,
                right: Some(6),
                bottom: Some(12),
                left: None,
                size: 68,
            },
        ],
        TemplateCategory::Default => &[PlacementOption {
            top: None,
            right: Some(8),
            bottom: Some(8),
            left: None,
            size: 64,
        }],
    }
}

/// Entrance animation applied to the whole card, one per category.
pub fn entrance_animation(category: TemplateCategory) -> &'static str {
    match category {
        TemplateCategory::Promo => "slideInUp",
        TemplateCategory::NewCourse => "zoomIn",
        TemplateCategory::Sale => "pulseIn",
        TemplateCategory::Event => "slideInRight",
        TemplateCategory::Default => GENERIC_ENTRANCE,
    }
}

/// The resolved visual configuration for one render of an ad card.
#[derive(Debug, Clone, Serialize)]
pub struct AdPresentation {
    pub layout: LayoutVariant,
    pub lottie: &'static str,
    pub placement: PlacementOption,
    pub entrance: &'static str,
    pub gradient_colors: Vec<String>,
    pub badge_color: String,
    pub text_color: String,
}

/// Resolves the presentation for one render: a random layout variant,
/// Lottie graphic, and placement from the category's tables, plus the
/// normalized style colors.
pub fn resolve(category: TemplateCategory, style: &StyleConfig) -> AdPresentation {
    let layout = pick_random(layout_variants(category))
        .copied()
        .expect("every category has at least one layout variant");
    let lottie = pick_random(lottie_animations(category))
        .copied()
        .expect("every category has at least one lottie graphic");
    let placement = pick_random(placements(category))
        .copied()
        .expect("every category has at least one placement");

    AdPresentation {
        layout,
        lottie,
        placement,
        entrance: entrance_animation(category),
        gradient_colors: parse_gradient_colors(style.gradient_colors.as_ref()),
        badge_color: style.badge_color.clone(),
        text_color: style.text_color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CATEGORIES: [TemplateCategory; 5] = [
        TemplateCategory::Promo,
        TemplateCategory::NewCourse,
        TemplateCategory::Sale,
        TemplateCategory::Event,
        TemplateCategory::Default,
    ];

    fn list(colors: &[&str]) -> ColorsInput {
        ColorsInput::List(colors.iter().map(|c| (*c).to_string()).collect())
    }

    #[test]
    fn test_list_input_passes_through() {
        let input = list(&["#abc", "#def", "tomato"]);
        assert_eq!(
            parse_gradient_colors(Some(&input)),
            vec!["#abc", "#def", "tomato"]
        );

        // Pass-through applies even to an empty list.
        let empty = list(&[]);
        assert!(parse_gradient_colors(Some(&empty)).is_empty());
    }

    #[test]
    fn test_delimited_input_is_split_and_trimmed() {
        let input = ColorsInput::Delimited("red; blue ,green".to_string());
        assert_eq!(
            parse_gradient_colors(Some(&input)),
            vec!["red", "blue", "green"]
        );
    }

    #[test]
    fn test_unusable_input_yields_fallback() {
        assert_eq!(parse_gradient_colors(None), vec!["#000", "#fff"]);

        let empty = ColorsInput::Delimited(String::new());
        assert_eq!(parse_gradient_colors(Some(&empty)), vec!["#000", "#fff"]);

        let only_separators = ColorsInput::Delimited(";,  ,;".to_string());
        assert_eq!(
            parse_gradient_colors(Some(&only_separators)),
            vec!["#000", "#fff"]
        );
    }

    #[test]
    fn test_colors_input_deserializes_from_array_or_string() {
        let from_array: ColorsInput = serde_json::from_str(r##"["#111", "#222"]"##)
            .expect("array form deserializes");
        assert!(matches!(from_array, ColorsInput::List(ref v) if v.len() == 2));

        let from_string: ColorsInput =
            serde_json::from_str(r##""#111; #222""##).expect("string form deserializes");
        assert!(matches!(from_string, ColorsInput::Delimited(_)));
    }

    #[test]
    fn test_pick_random_returns_a_member() {
        let items = ["a", "b", "c"];
        for _ in 0..50 {
            let picked = pick_random(&items).expect("non-empty slice");
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_pick_random_on_empty_slice_is_none() {
        let items: [u8; 0] = [];
        assert!(pick_random(&items).is_none());
    }

    #[test]
    fn test_pick_random_varies() {
        // Statistical check: over 1000 trials of a two-element slice both
        // elements must show up; a constant pick passes membership tests
        // but fails this one with overwhelming probability.
        let items = ["a", "b"];
        let mut seen_a = false;
        let mut seen_b = false;
        for _ in 0..1000 {
            let picked = pick_random(&items).expect("non-empty slice");
            assert!(items.contains(picked));
            if *picked == "a" {
                seen_a = true;
            } else {
                seen_b = true;
            }
        }
        assert!(seen_a && seen_b);
    }

    #[test]
    fn test_every_category_has_variants_and_placements() {
        for category in ALL_CATEGORIES {
            assert!(
                !layout_variants(category).is_empty(),
                "no layout variants for {category}"
            );
            assert!(
                !placements(category).is_empty(),
                "no placements for {category}"
            );
            assert!(
                !lottie_animations(category).is_empty(),
                "no lottie graphics for {category}"
            );
            assert!(!entrance_animation(category).is_empty());
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default() {
        assert_eq!(TemplateCategory::from_tag("promo"), TemplateCategory::Promo);
        assert_eq!(
            TemplateCategory::from_tag("newCourse"),
            TemplateCategory::NewCourse
        );
        assert_eq!(
            TemplateCategory::from_tag("holiday"),
            TemplateCategory::Default
        );
        assert_eq!(TemplateCategory::from_tag(""), TemplateCategory::Default);
    }

    #[test]
    fn test_resolve_draws_from_category_tables() {
        let style = StyleConfig {
            gradient_colors: Some(ColorsInput::Delimited("#111; #222".to_string())),
            ..StyleConfig::default()
        };
        let presentation = resolve(TemplateCategory::Sale, &style);

        assert!(layout_variants(TemplateCategory::Sale).contains(&presentation.layout));
        assert!(lottie_animations(TemplateCategory::Sale).contains(&presentation.lottie));
        assert!(placements(TemplateCategory::Sale).contains(&presentation.placement));
        assert_eq!(presentation.entrance, "pulseIn");
        assert_eq!(presentation.gradient_colors, vec!["#111", "#222"]);
    }

    #[test]
    fn test_resolve_defaults_gradient_when_style_is_blank() {
        let presentation = resolve(TemplateCategory::Default, &StyleConfig::default());
        assert_eq!(presentation.gradient_colors, vec!["#000", "#fff"]);
        assert_eq!(presentation.entrance, "fadeIn");
    }

    #[test]
    fn test_placement_display_lists_offsets() {
        let placement = PlacementOption {
            top: Some(8),
            right: Some(6),
            bottom: None,
            left: None,
            size: 96,
        };
        assert_eq!(placement.to_string(), "top: 8%, right: 6%, size: 96px");
    }
}
