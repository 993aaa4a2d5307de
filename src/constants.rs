//! Shared constants for the admin content tooling.

/// Gradient used whenever the form supplied no usable colors.
pub const FALLBACK_GRADIENT: [&str; 2] = ["#000", "#fff"];

/// Characters accepted as separators in a delimited color string.
pub const GRADIENT_DELIMITERS: [char; 2] = [';', ','];

/// Entrance animation applied when a category has no dedicated one.
pub const GENERIC_ENTRANCE: &str = "fadeIn";

/// Page size used when a listing request does not specify one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Hard ceiling on the page size a listing request may ask for.
pub const MAX_PER_PAGE: u32 = 100;
