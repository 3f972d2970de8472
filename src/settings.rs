//! Default tuning values.

/// Palette size used when the builder isn't told otherwise.
pub const DEFAULT_MAX_COLOR_COUNT: usize = 16;
/// Images with a larger pixel area are scaled down to roughly this area before sampling.
pub const DEFAULT_RESIZE_AREA: u32 = 112 * 112;

pub const TARGET_DARK_LUMA: f64 = 0.26;
pub const MAX_DARK_LUMA: f64 = 0.45;

pub const MIN_LIGHT_LUMA: f64 = 0.55;
pub const TARGET_LIGHT_LUMA: f64 = 0.74;

pub const MIN_NORMAL_LUMA: f64 = 0.3;
pub const TARGET_NORMAL_LUMA: f64 = 0.5;
pub const MAX_NORMAL_LUMA: f64 = 0.7;

pub const TARGET_MUTED_SATURATION: f64 = 0.3;
pub const MAX_MUTED_SATURATION: f64 = 0.4;

pub const TARGET_VIBRANT_SATURATION: f64 = 1.0;
pub const MIN_VIBRANT_SATURATION: f64 = 0.35;

pub const WEIGHT_SATURATION: f64 = 0.24;
pub const WEIGHT_LUMA: f64 = 0.52;
pub const WEIGHT_POPULATION: f64 = 0.24;

pub const BLACK_MAX_LIGHTNESS: f64 = 0.05;
pub const WHITE_MIN_LIGHTNESS: f64 = 0.95;
/// Hue band (degrees) of the skin tone line avoided by the default filter.
pub const I_LINE_HUE_MIN: f64 = 10.0;
pub const I_LINE_HUE_MAX: f64 = 37.0;
pub const I_LINE_MAX_SATURATION: f64 = 0.82;

/// Contrast ratio title text needs against its swatch.
pub const MIN_CONTRAST_TITLE_TEXT: f64 = 3.0;
/// Contrast ratio body text needs against its swatch.
pub const MIN_CONTRAST_BODY_TEXT: f64 = 4.5;

pub const MIN_ALPHA_SEARCH_MAX_ITERATIONS: usize = 10;
pub const MIN_ALPHA_SEARCH_PRECISION: f64 = 1.0 / 255.0;
