//! WCAG contrast ratios and the most transparent white or black overlay that still reads
//! on a given background.

use image::{Rgb, Rgba};

use crate::{settings, Error, Result, Swatch};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// sRGB color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy)]
struct Unit {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Unit {
    fn opaque(Rgb([r, g, b]): Rgb<u8>, alpha: f64) -> Self {
        Unit {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: alpha,
        }
    }

    fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    fn composite_over(self, background: Unit) -> Unit {
        let a = 1.0 - (1.0 - self.a) * (1.0 - background.a);
        if a <= 0.0 {
            return Unit { a: 0.0, ..self };
        }
        let mix = |fg: f64, bg: f64| (fg * self.a + bg * background.a * (1.0 - self.a)) / a;
        Unit {
            r: mix(self.r, background.r),
            g: mix(self.g, background.g),
            b: mix(self.b, background.b),
            a,
        }
    }

    fn luminance(&self) -> f64 {
        fn linear(c: f64) -> f64 {
            if c < 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl From<Rgba<u8>> for Unit {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Unit::opaque(Rgb([r, g, b]), a as f64 / 255.0)
    }
}

/// Relative luminance of an sRGB color
pub fn calculate_luminance(color: Rgb<u8>) -> f64 {
    Unit::opaque(color, 1.0).luminance()
}

fn contrast(foreground: Unit, background: Unit) -> Result<f64> {
    if !background.is_opaque() {
        return Err(Error::TranslucentBackground);
    }
    let foreground = if foreground.is_opaque() {
        foreground
    } else {
        foreground.composite_over(background)
    };
    let l1 = foreground.luminance() + 0.05;
    let l2 = background.luminance() + 0.05;
    Ok(l1.max(l2) / l1.min(l2))
}

/// Contrast ratio between a possibly translucent foreground and an opaque background, from 1 to 21
pub fn calculate_contrast(foreground: Rgba<u8>, background: Rgba<u8>) -> Result<f64> {
    contrast(foreground.into(), background.into())
}

/// Contrast ratio of `foreground` drawn with `alpha` over an opaque background
pub fn calculate_contrast_with_alpha(
    foreground: Rgb<u8>,
    alpha: f64,
    background: Rgba<u8>,
) -> Result<f64> {
    contrast(Unit::opaque(foreground, alpha), background.into())
}

/// Smallest alpha at which `foreground` reaches `min_contrast_ratio` over `background`.
///
/// The binary search returns the upper end of its final interval, which is known to pass.
pub fn calculate_minimum_alpha(
    foreground: Rgb<u8>,
    background: Rgba<u8>,
    min_contrast_ratio: f64,
) -> Result<f64> {
    let background = Unit::from(background);
    let passes = |alpha: f64| -> Result<bool> {
        Ok(contrast(Unit::opaque(foreground, alpha), background)? >= min_contrast_ratio)
    };

    if !passes(1.0)? {
        return Err(Error::InsufficientContrast {
            ratio: min_contrast_ratio,
        });
    }

    let mut min_alpha = 0.0;
    let mut max_alpha = 1.0;
    let mut iterations = 0;
    while iterations < settings::MIN_ALPHA_SEARCH_MAX_ITERATIONS
        && max_alpha - min_alpha > settings::MIN_ALPHA_SEARCH_PRECISION
    {
        let alpha = (min_alpha + max_alpha) / 2.0;
        if passes(alpha)? {
            max_alpha = alpha;
        } else {
            min_alpha = alpha;
        }
        iterations += 1;
    }

    Ok(max_alpha)
}

/// White or black drawn with some opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    /// Overlay color
    pub color: Rgb<u8>,
    /// Opacity in `[0, 1]`
    pub alpha: f64,
}

impl Overlay {
    /// The overlay with its opacity rounded up to 8 bits, so it never gets weaker
    pub fn to_rgba(&self) -> Rgba<u8> {
        let Rgb([r, g, b]) = self.color;
        let a = (self.alpha * 255.0).ceil().clamp(0.0, 255.0) as u8;
        Rgba([r, g, b, a])
    }
}

fn overlay(color: Rgb<u8>, background: Rgba<u8>, min_contrast_ratio: f64) -> Result<Overlay> {
    calculate_minimum_alpha(color, background, min_contrast_ratio)
        .map(|alpha| Overlay { color, alpha })
}

/// Most transparent white overlay reaching `min_contrast_ratio` on `background`, or the most
/// transparent black one if no white overlay does
pub fn minimum_alpha_overlay(background: Rgba<u8>, min_contrast_ratio: f64) -> Result<Overlay> {
    match overlay(WHITE, background, min_contrast_ratio) {
        Err(Error::InsufficientContrast { .. }) => overlay(BLACK, background, min_contrast_ratio),
        result => result,
    }
}

/// Text colors readable on a swatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColors {
    /// For titles, at least [`MIN_CONTRAST_TITLE_TEXT`](crate::MIN_CONTRAST_TITLE_TEXT)
    pub title: Overlay,
    /// For body text, at least [`MIN_CONTRAST_BODY_TEXT`](crate::MIN_CONTRAST_BODY_TEXT)
    pub body: Overlay,
}

impl Swatch {
    /// Title and body text colors for this swatch as a background.
    ///
    /// Both use white if white works for both, else black if black works for both. Otherwise
    /// each one takes whichever color reaches its own threshold, preferring white.
    pub fn text_colors(&self) -> TextColors {
        let Rgb([r, g, b]) = self.rgb();
        let background = Rgba([r, g, b, 255]);
        let title = settings::MIN_CONTRAST_TITLE_TEXT;
        let body = settings::MIN_CONTRAST_BODY_TEXT;

        let light = (
            overlay(WHITE, background, title).ok(),
            overlay(WHITE, background, body).ok(),
        );
        if let (Some(title), Some(body)) = light {
            return TextColors { title, body };
        }

        let dark = (
            overlay(BLACK, background, title).ok(),
            overlay(BLACK, background, body).ok(),
        );
        if let (Some(title), Some(body)) = dark {
            return TextColors { title, body };
        }

        let opaque_white = Overlay {
            color: WHITE,
            alpha: 1.0,
        };
        TextColors {
            title: light.0.or(dark.0).unwrap_or(opaque_white),
            body: light.1.or(dark.1).unwrap_or(opaque_white),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorCode;

    const OPAQUE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const OPAQUE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn luminance_extremes() {
        assert_eq!(calculate_luminance(BLACK), 0.0);
        assert!((calculate_luminance(WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = calculate_contrast(OPAQUE_BLACK, OPAQUE_WHITE).unwrap();
        assert!((ratio - 21.0).abs() < 1e-9);
        let ratio = calculate_contrast(OPAQUE_WHITE, OPAQUE_BLACK).unwrap();
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn transparent_foreground_has_no_contrast() {
        let ratio = calculate_contrast(Rgba([255, 255, 255, 0]), OPAQUE_BLACK).unwrap();
        assert!((ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn translucent_background_is_rejected() {
        let background = Rgba([10, 20, 30, 200]);
        assert_eq!(
            calculate_contrast(OPAQUE_WHITE, background),
            Err(Error::TranslucentBackground)
        );
        assert_eq!(
            minimum_alpha_overlay(background, 3.0),
            Err(Error::TranslucentBackground)
        );
    }

    #[test]
    fn prefers_white_on_dark_backgrounds() {
        let overlay = minimum_alpha_overlay(Rgba([20, 20, 60, 255]), 4.5).unwrap();
        assert_eq!(overlay.color, WHITE);
        assert!(overlay.alpha > 0.0 && overlay.alpha <= 1.0);
    }

    #[test]
    fn falls_back_to_black_on_light_backgrounds() {
        let overlay = minimum_alpha_overlay(Rgba([250, 240, 200, 255]), 4.5).unwrap();
        assert_eq!(overlay.color, BLACK);
    }

    #[test]
    fn unreachable_ratio() {
        assert_eq!(
            minimum_alpha_overlay(Rgba([128, 128, 128, 255]), 22.0),
            Err(Error::InsufficientContrast { ratio: 22.0 })
        );
    }

    #[test]
    fn minimum_alpha_always_passes() {
        for value in (0..=255u8).step_by(5) {
            for &(r, g, b) in &[(value, value, value), (value, 0, 255 - value), (0, value, 90)] {
                let background = Rgba([r, g, b, 255]);
                for &ratio in &[1.5, 3.0, 4.5, 7.0] {
                    if let Ok(overlay) = minimum_alpha_overlay(background, ratio) {
                        let measured =
                            calculate_contrast_with_alpha(overlay.color, overlay.alpha, background)
                                .unwrap();
                        assert!(
                            measured >= ratio,
                            "{:?} on {:?}: {}",
                            overlay,
                            background,
                            measured
                        );

                        let rounded = calculate_contrast(overlay.to_rgba(), background).unwrap();
                        assert!(rounded >= ratio, "{:?} on {:?}: {}", overlay, background, rounded);
                    }
                }
            }
        }
    }

    #[test]
    fn swatch_text_colors_are_readable() {
        for &(r, g, b) in &[(20, 20, 20), (240, 240, 240), (200, 30, 30), (120, 120, 120)] {
            let swatch = Swatch::new(ColorCode::from_rgb(r, g, b), 1);
            let background = Rgba([r, g, b, 255]);
            let colors = swatch.text_colors();
            let title =
                calculate_contrast_with_alpha(colors.title.color, colors.title.alpha, background)
                    .unwrap();
            let body =
                calculate_contrast_with_alpha(colors.body.color, colors.body.alpha, background)
                    .unwrap();
            assert!(title >= settings::MIN_CONTRAST_TITLE_TEXT);
            assert!(body >= settings::MIN_CONTRAST_BODY_TEXT);
        }
    }

    #[test]
    fn dark_swatch_uses_white_text() {
        let swatch = Swatch::new(ColorCode::from_rgb(16, 16, 16), 1);
        let colors = swatch.text_colors();
        assert_eq!(colors.title.color, WHITE);
        assert_eq!(colors.body.color, WHITE);
        assert!(colors.title.alpha <= colors.body.alpha);
    }
}
