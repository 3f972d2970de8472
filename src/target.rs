use crate::settings;

/// Minimum, target and maximum of a value in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Smallest accepted value
    pub min: f64,
    /// Preferred value
    pub target: f64,
    /// Largest accepted value
    pub max: f64,
}

impl Range {
    const DEFAULT: Range = Range {
        min: 0.0,
        target: 0.5,
        max: 1.0,
    };

    /// Whether `value` lies within `min..=max`
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Relative importance of the three score components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Weight of the distance to the target saturation
    pub saturation: f64,
    /// Weight of the distance to the target lightness
    pub lightness: f64,
    /// Weight of the population relative to the dominant swatch
    pub population: f64,
}

impl Weights {
    const DEFAULT: Weights = Weights {
        saturation: settings::WEIGHT_SATURATION,
        lightness: settings::WEIGHT_LUMA,
        population: settings::WEIGHT_POPULATION,
    };

    /// Scales the weights to sum up to 1. Does nothing if they don't sum to a positive value.
    pub fn normalize(&mut self) {
        let sum = self.saturation + self.lightness + self.population;
        if sum > 0.0 {
            self.saturation /= sum;
            self.lightness /= sum;
            self.population /= sum;
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const LIGHT_LUMA: Range = Range {
    min: settings::MIN_LIGHT_LUMA,
    target: settings::TARGET_LIGHT_LUMA,
    max: 1.0,
};

const NORMAL_LUMA: Range = Range {
    min: settings::MIN_NORMAL_LUMA,
    target: settings::TARGET_NORMAL_LUMA,
    max: settings::MAX_NORMAL_LUMA,
};

const DARK_LUMA: Range = Range {
    min: 0.0,
    target: settings::TARGET_DARK_LUMA,
    max: settings::MAX_DARK_LUMA,
};

const VIBRANT_SATURATION: Range = Range {
    min: settings::MIN_VIBRANT_SATURATION,
    target: settings::TARGET_VIBRANT_SATURATION,
    max: 1.0,
};

const MUTED_SATURATION: Range = Range {
    min: 0.0,
    target: settings::TARGET_MUTED_SATURATION,
    max: settings::MAX_MUTED_SATURATION,
};

/// Perceptual bucket a palette picks one swatch for.
///
/// Two targets are equal if their saturation and lightness ranges are, so a target with
/// normalized weights still finds the swatch selected for the target it was copied from.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    /// Accepted saturation
    pub saturation: Range,
    /// Accepted lightness
    pub lightness: Range,
    /// Score weights
    pub weights: Weights,
    /// Whether the selected color is withheld from targets scored later
    pub exclusive: bool,
}

impl Target {
    const fn with(saturation: Range, lightness: Range) -> Self {
        Target {
            saturation,
            lightness,
            weights: Weights::DEFAULT,
            exclusive: true,
        }
    }

    /// Light and saturated
    pub const LIGHT_VIBRANT: Target = Target::with(VIBRANT_SATURATION, LIGHT_LUMA);
    /// Saturated
    pub const VIBRANT: Target = Target::with(VIBRANT_SATURATION, NORMAL_LUMA);
    /// Dark and saturated
    pub const DARK_VIBRANT: Target = Target::with(VIBRANT_SATURATION, DARK_LUMA);
    /// Light and desaturated
    pub const LIGHT_MUTED: Target = Target::with(MUTED_SATURATION, LIGHT_LUMA);
    /// Desaturated
    pub const MUTED: Target = Target::with(MUTED_SATURATION, NORMAL_LUMA);
    /// Dark and desaturated
    pub const DARK_MUTED: Target = Target::with(MUTED_SATURATION, DARK_LUMA);

    /// The six canonical targets in the order they are scored by default
    pub const DEFAULTS: [Target; 6] = [
        Target::LIGHT_VIBRANT,
        Target::VIBRANT,
        Target::DARK_VIBRANT,
        Target::LIGHT_MUTED,
        Target::MUTED,
        Target::DARK_MUTED,
    ];

    /// Builder for a custom target, starting from the full ranges
    pub fn builder() -> TargetBuilder {
        TargetBuilder {
            target: Target::default(),
        }
    }

    /// Builder for a custom target, starting from this one
    pub fn to_builder(&self) -> TargetBuilder {
        TargetBuilder { target: *self }
    }

    /// Whether a color with this saturation and lightness may be scored
    pub fn accepts(&self, saturation: f64, lightness: f64) -> bool {
        self.saturation.contains(saturation) && self.lightness.contains(lightness)
    }

    /// Scales the weights to sum up to 1
    pub fn normalize_weights(&mut self) {
        self.weights.normalize();
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::with(Range::DEFAULT, Range::DEFAULT)
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        self.saturation == other.saturation && self.lightness == other.lightness
    }
}

/// Builds a custom [`Target`]
#[derive(Debug, Clone)]
pub struct TargetBuilder {
    target: Target,
}

impl TargetBuilder {
    /// Smallest accepted saturation
    pub fn minimum_saturation(mut self, value: f64) -> Self {
        self.target.saturation.min = value;
        self
    }

    /// Preferred saturation
    pub fn target_saturation(mut self, value: f64) -> Self {
        self.target.saturation.target = value;
        self
    }

    /// Largest accepted saturation
    pub fn maximum_saturation(mut self, value: f64) -> Self {
        self.target.saturation.max = value;
        self
    }

    /// Smallest accepted lightness
    pub fn minimum_lightness(mut self, value: f64) -> Self {
        self.target.lightness.min = value;
        self
    }

    /// Preferred lightness
    pub fn target_lightness(mut self, value: f64) -> Self {
        self.target.lightness.target = value;
        self
    }

    /// Largest accepted lightness
    pub fn maximum_lightness(mut self, value: f64) -> Self {
        self.target.lightness.max = value;
        self
    }

    /// Weight of the saturation score
    pub fn saturation_weight(mut self, value: f64) -> Self {
        self.target.weights.saturation = value;
        self
    }

    /// Weight of the lightness score
    pub fn lightness_weight(mut self, value: f64) -> Self {
        self.target.weights.lightness = value;
        self
    }

    /// Weight of the population score
    pub fn population_weight(mut self, value: f64) -> Self {
        self.target.weights.population = value;
        self
    }

    /// Whether the selected color is withheld from later targets
    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.target.exclusive = exclusive;
        self
    }

    /// Finishes the target
    pub fn build(self) -> Target {
        self.target
    }
}
