use hsl::HSL;
use image::Rgb;

use crate::settings;

/// Decides which colors may take part in a palette
pub trait Filter {
    /// Returns false to drop the color
    fn is_allowed(&self, rgb: Rgb<u8>, hsl: &HSL) -> bool;
}

impl<F: Fn(Rgb<u8>, &HSL) -> bool> Filter for F {
    fn is_allowed(&self, rgb: Rgb<u8>, hsl: &HSL) -> bool {
        self(rgb, hsl)
    }
}

/// Filter that can be handed to another thread together with a builder
pub type BoxedFilter = Box<dyn Filter + Send + Sync>;

/// Drops near-black, near-white and skin tone colors
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFilter;

impl DefaultFilter {
    fn is_black(hsl: &HSL) -> bool {
        hsl.l <= settings::BLACK_MAX_LIGHTNESS
    }

    fn is_white(hsl: &HSL) -> bool {
        hsl.l >= settings::WHITE_MIN_LIGHTNESS
    }

    fn is_near_red_i_line(hsl: &HSL) -> bool {
        (settings::I_LINE_HUE_MIN..=settings::I_LINE_HUE_MAX).contains(&hsl.h)
            && (0.0..=settings::I_LINE_MAX_SATURATION).contains(&hsl.s)
    }
}

impl Filter for DefaultFilter {
    fn is_allowed(&self, _rgb: Rgb<u8>, hsl: &HSL) -> bool {
        !Self::is_white(hsl) && !Self::is_black(hsl) && !Self::is_near_red_i_line(hsl)
    }
}

pub(crate) fn is_allowed(filters: &[BoxedFilter], rgb: Rgb<u8>, hsl: &HSL) -> bool {
    filters.iter().all(|filter| filter.is_allowed(rgb, hsl))
}
