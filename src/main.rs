use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use uuid::Uuid;
use validator::Validate;

use adboard::models::Ad;
use adboard::presentation::{self, ColorsInput, StyleConfig, TemplateCategory};
use adboard::render;
use adboard::settings::Settings;
use adboard::validation::{AdDraft, CourseDraft, EnrollmentDraft, PolicyDraft, ThemeDraft};
use adboard::Error;

#[derive(Parser)]
#[command(name = "adboard", version, about = "Admin content tools for the e-learning platform")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render an HTML preview of an ad card
    Preview {
        /// JSON file with the ad record; a built-in sample is used when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate a form payload and print the normalized record
    Validate {
        /// JSON file with the payload
        input: PathBuf,
        /// Payload kind
        #[arg(long, value_enum, default_value_t = PayloadKind::Ad)]
        kind: PayloadKind,
    },
    /// Print the presentation tables for a template category
    Variants {
        /// Category tag (promo, newCourse, sale, event, default)
        category: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PayloadKind {
    Ad,
    Course,
    Enrollment,
    Policy,
    Theme,
}

fn setup_logger(verbose: bool) -> Result<(), fern::InitError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    if let Err(e) = setup_logger(cli.verbose) {
        eprintln!("logger setup failed: {e}");
    }

    match cli.command {
        Command::Preview { input, out } => preview(input, out),
        Command::Validate { input, kind } => validate(&input, kind),
        Command::Variants { category } => variants(&category),
    }
}

fn preview(input: Option<PathBuf>, out: Option<PathBuf>) -> Result<(), Error> {
    let settings = Settings::new()?;
    let ad: Ad = match input {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => sample_ad(),
    };

    let resolved = presentation::resolve(ad.template, &ad.style);
    log::debug!(
        "resolved layout {} with graphic {}",
        resolved.layout.name,
        resolved.lottie
    );

    let html = render::render_ad_card(&ad, &resolved, &settings.site.name, &settings.theme)?;
    match out {
        Some(path) => {
            fs::write(&path, html)?;
            log::info!("wrote preview to {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn validate(input: &Path, kind: PayloadKind) -> Result<(), Error> {
    let raw = fs::read_to_string(input)?;

    let normalized = match kind {
        PayloadKind::Ad => {
            let draft: AdDraft = serde_json::from_str(&raw)?;
            check(&draft)?;
            serde_json::to_string_pretty(&draft.into_record())?
        }
        PayloadKind::Course => {
            let draft: CourseDraft = serde_json::from_str(&raw)?;
            check(&draft)?;
            serde_json::to_string_pretty(&draft.into_record())?
        }
        PayloadKind::Enrollment => {
            let draft: EnrollmentDraft = serde_json::from_str(&raw)?;
            check(&draft)?;
            serde_json::to_string_pretty(&draft.into_record())?
        }
        PayloadKind::Policy => {
            let draft: PolicyDraft = serde_json::from_str(&raw)?;
            check(&draft)?;
            serde_json::to_string_pretty(&draft.into_record())?
        }
        PayloadKind::Theme => {
            let draft: ThemeDraft = serde_json::from_str(&raw)?;
            check(&draft)?;
            serde_json::to_string_pretty(&draft.into_record())?
        }
    };

    log::info!("payload is valid");
    println!("{normalized}");
    Ok(())
}

/// Runs validation, logging each field problem before handing the error up.
fn check<T: Validate>(draft: &T) -> Result<(), Error> {
    match draft.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            for (field, issues) in errors.field_errors() {
                for issue in issues {
                    let detail = issue
                        .message
                        .as_ref()
                        .map_or_else(|| issue.code.to_string(), ToString::to_string);
                    log::warn!("{field}: {detail}");
                }
            }
            Err(errors.into())
        }
    }
}

fn variants(tag: &str) -> Result<(), Error> {
    let category = TemplateCategory::from_tag(tag);
    if category == TemplateCategory::Default && tag != "default" {
        log::warn!("unknown category '{tag}', showing defaults");
    }

    println!("category: {category}");
    println!("entrance animation: {}", presentation::entrance_animation(category));
    println!("layout variants:");
    for variant in presentation::layout_variants(category) {
        println!(
            "  {} (container={}, overlay={}, badge={}, text={})",
            variant.name, variant.container, variant.overlay, variant.badge, variant.text
        );
    }
    println!("lottie graphics:");
    for name in presentation::lottie_animations(category) {
        println!("  {name}");
    }
    println!("placements:");
    for placement in presentation::placements(category) {
        println!("  {placement}");
    }
    Ok(())
}

fn sample_ad() -> Ad {
    Ad {
        id: Uuid::new_v4(),
        title: "Spring cohort enrollment is open".to_string(),
        description: "Save 20% on all live courses until Friday.".to_string(),
        image_url: "https://cdn.adboard-academy.example/media/spring.jpg".to_string(),
        link: "https://adboard-academy.example/courses".to_string(),
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
