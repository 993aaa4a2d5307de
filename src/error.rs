//! Crate-wide error type.
//!
//! The presentation helpers are total and never produce one of these;
//! errors come from configuration, templating, and payload handling.

use derive_more::{Display, Error, From};

#[derive(Debug, Display, Error, From)]
pub enum Error {
    #[display("configuration error: {_0}")]
    Config(#[error(source)] config::ConfigError),
    #[display("template error: {_0}")]
    Template(#[error(source)] handlebars::RenderError),
    #[display("malformed payload: {_0}")]
    Json(#[error(source)] serde_json::Error),
    #[display("invalid payload: {_0}")]
    Validation(#[error(source)] validator::ValidationErrors),
    #[display("io error: {_0}")]
    Io(#[error(source)] std::io::Error),
}
