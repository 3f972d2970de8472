use std::fmt;

use hsl::HSL;
use image::Rgb;

use crate::{BoxedFilter, ColorCode, Result};

mod histogram;
mod median_cut;

pub use histogram::Histogram;
pub use median_cut::MedianCut;

/// Color with population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    color: ColorCode,
    population: usize,
    hsl: HSL,
}

impl Swatch {
    /// Swatch of `population` pixels. The color is stored at full width.
    pub fn new(color: ColorCode, population: usize) -> Self {
        let color = color.normalized();
        Self {
            color,
            population,
            hsl: color.hsl(),
        }
    }

    /// Representative color
    pub fn color(&self) -> ColorCode {
        self.color
    }

    /// Representative color as 8 bit RGB
    pub fn rgb(&self) -> Rgb<u8> {
        self.color.rgb()
    }

    /// Hue, saturation and lightness of the color
    pub fn hsl(&self) -> &HSL {
        &self.hsl
    }

    /// Number of pixels this swatch stands for
    pub fn population(&self) -> usize {
        self.population
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {} pixels", self.color, self.population)
    }
}

/// Quantizer trait
pub trait Quantizer {
    /// Reduces `colors` to at most `max_colors` swatches, ignoring every color a filter rejects
    fn quantize(
        &self,
        colors: &[ColorCode],
        max_colors: usize,
        filters: &[BoxedFilter],
    ) -> Result<Vec<Swatch>>;
}

/// Quantizes `colors` with [`MedianCut`]
pub fn quantize(
    colors: &[ColorCode],
    max_colors: usize,
    filters: &[BoxedFilter],
) -> Result<Vec<Swatch>> {
    MedianCut.quantize(colors, max_colors, filters)
}
