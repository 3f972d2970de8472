use std::fmt;

use hsl::HSL;
use image::Rgb;

/// Bits stored per channel of a [`ColorCode`]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Width {
    /// 5 bits per channel, used while quantizing
    Quantized,
    /// 8 bits per channel
    Full,
}

impl Width {
    /// Number of bits per channel
    pub const fn bits(self) -> u32 {
        match self {
            Width::Quantized => 5,
            Width::Full => 8,
        }
    }

    const fn mask(self) -> u32 {
        (1 << self.bits()) - 1
    }
}

/// Color channel
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Channel {
    Red,
    Green,
    Blue,
}

/// RGB color packed into a single integer with a fixed channel width.
///
/// Channels are laid out as `r << 2w | g << w | b`. Colors order by their packed value, which
/// is what the median cut relies on when it sorts a box along its leading channel.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ColorCode {
    storage: u32,
    width: Width,
}

impl ColorCode {
    /// Wraps an already packed value. Bits above the three channels are discarded.
    pub const fn from_storage(storage: u32, width: Width) -> Self {
        Self {
            storage: storage & ((1 << (3 * width.bits())) - 1),
            width,
        }
    }

    /// Packs three channels, masking each one to `width` bits
    pub const fn from_components([r, g, b]: [u32; 3], width: Width) -> Self {
        let mask = width.mask();
        let bits = width.bits();
        Self {
            storage: ((r & mask) << (2 * bits)) | ((g & mask) << bits) | (b & mask),
            width,
        }
    }

    /// Full width color from 8 bit channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_components([r as u32, g as u32, b as u32], Width::Full)
    }

    /// Full width color from an alpha-premultiplied `[r, g, b, a]` pixel.
    ///
    /// Fully transparent pixels keep their channels as they are.
    pub fn from_premultiplied([r, g, b, a]: [u8; 4]) -> Self {
        let unmultiply = |value: u8| {
            if a == 0 {
                value as u32
            } else {
                value as u32 * 255 / a as u32
            }
        };
        Self::from_components([unmultiply(r), unmultiply(g), unmultiply(b)], Width::Full)
    }

    /// Packed value
    pub const fn storage(self) -> u32 {
        self.storage
    }

    /// Channel width
    pub const fn width(self) -> Width {
        self.width
    }

    /// Red channel at the current width
    pub const fn red(self) -> u8 {
        ((self.storage >> (2 * self.width.bits())) & self.width.mask()) as u8
    }

    /// Green channel at the current width
    pub const fn green(self) -> u8 {
        ((self.storage >> self.width.bits()) & self.width.mask()) as u8
    }

    /// Blue channel at the current width
    pub const fn blue(self) -> u8 {
        (self.storage & self.width.mask()) as u8
    }

    /// Channels at the current width
    pub const fn components(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// The color as 8 bit RGB, widening it first if necessary
    pub fn rgb(self) -> Rgb<u8> {
        Rgb(self.normalized().components())
    }

    /// Hue in whole degrees `[0, 360)`, saturation and lightness in `[0, 1]`
    pub fn hsl(self) -> HSL {
        let [r, g, b] = self.normalized().components().map(|c| c as f64 / 255.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let (mut h, s) = if delta == 0.0 {
            (0.0, 0.0)
        } else {
            let h = if max == r {
                ((g - b) / delta) % 6.0
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (h, delta / (1.0 - (2.0 * l - 1.0).abs()))
        };

        h = (h * 60.0) % 360.0;
        if h < 0.0 {
            h += 360.0;
        }

        HSL {
            h: h.round() % 360.0,
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Re-encodes every channel at `width`
    pub fn with_width(self, width: Width) -> Self {
        if width == self.width {
            return self;
        }
        let from = self.width.bits();
        let to = width.bits();
        let channels = self.components().map(|c| {
            let c = c as u32;
            if to > from {
                c << (to - from)
            } else {
                c >> (from - to)
            }
        });
        Self::from_components(channels, width)
    }

    /// Same color at 5 bits per channel
    pub fn quantized(self) -> Self {
        self.with_width(Width::Quantized)
    }

    /// Same color at 8 bits per channel
    pub fn normalized(self) -> Self {
        self.with_width(Width::Full)
    }

    /// Swaps `channel` into the red position. Applying it twice restores the color.
    pub(crate) fn with_leading(self, channel: Channel) -> Self {
        let [r, g, b] = self.components();
        let swapped = match channel {
            Channel::Red => return self,
            Channel::Green => [g, r, b],
            Channel::Blue => [b, g, r],
        };
        Self::from_components(swapped.map(u32::from), self.width)
    }
}

impl From<Rgb<u8>> for ColorCode {
    fn from(Rgb([r, g, b]): Rgb<u8>) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [r, g, b] = self.rgb().0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}
