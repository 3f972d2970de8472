//! Extract significant colors from images
//!
//! The idea to extract 'vibrant' colors is adopted from the palette library from Android (by
//! Google). Pixels are reduced to a handful of swatches with a median cut quantizer, then every
//! [`Target`] (vibrant, muted, light, dark, ...) picks the swatch that scores best against its
//! preferred saturation and lightness.
//!
//! ```no_run
//! let image = image::open("cover.png").unwrap();
//! let palette = vibrant::Builder::from_image(&image).generate().unwrap();
//! if let Some(swatch) = palette.vibrant_swatch() {
//!     println!("{}", swatch);
//! }
//! ```

#![deny(missing_docs)]

pub use builder::Builder;
pub use color::{ColorCode, Width};
pub use contrast::{
    calculate_contrast, calculate_contrast_with_alpha, calculate_luminance,
    calculate_minimum_alpha, minimum_alpha_overlay, Overlay, TextColors,
};
pub use error::{Error, Result};
pub use filter::{BoxedFilter, DefaultFilter, Filter};
pub use palette::{score, Palette};
pub use quantizer::*;
pub use settings::{
    DEFAULT_MAX_COLOR_COUNT, DEFAULT_RESIZE_AREA, MIN_CONTRAST_BODY_TEXT,
    MIN_CONTRAST_TITLE_TEXT,
};
pub use target::{Range, Target, TargetBuilder, Weights};

pub use hsl::HSL;

mod builder;
mod color;
mod contrast;
mod error;
mod filter;
mod palette;
mod quantizer;
pub mod queue;
mod settings;
mod target;
