use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use log::debug;
#[cfg(feature = "print-truecolor")]
use termion::color;

use crate::{ColorCode, Swatch, Target};

/// Swatches of an image and the swatch selected for each target
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    swatches: Vec<Swatch>,
    selected: Vec<(Target, Swatch)>,
    dominant: Option<Swatch>,
}

/// Scores `swatches` against `targets` in order
pub fn score(swatches: Vec<Swatch>, targets: &[Target]) -> Palette {
    Palette::new(swatches, targets)
}

impl Palette {
    /// Picks the best swatch for every target. Targets are scored in order, and colors picked
    /// for an exclusive target are not available to the targets after it.
    pub fn new(swatches: Vec<Swatch>, targets: &[Target]) -> Self {
        let dominant = swatches
            .iter()
            .copied()
            .reduce(|max, swatch| {
                if swatch.population() > max.population() {
                    swatch
                } else {
                    max
                }
            });
        let mut palette = Palette {
            swatches,
            selected: Vec::with_capacity(targets.len()),
            dominant,
        };

        let mut used_colors = HashSet::new();
        for target in targets {
            let mut target = *target;
            target.normalize_weights();
            if let Some(swatch) = palette.max_scored_swatch(&target, &used_colors) {
                if target.exclusive {
                    used_colors.insert(swatch.color());
                }
                debug!("selected {} for {:?}", swatch, target);
                palette.selected.push((target, swatch));
            }
        }
        palette
    }

    fn max_scored_swatch(
        &self,
        target: &Target,
        used_colors: &HashSet<ColorCode>,
    ) -> Option<Swatch> {
        let max_population = self.dominant.map_or(1, |s| s.population()) as f64;
        let mut max = None;
        let mut max_value = 0_f64;

        for swatch in &self.swatches {
            let hsl = swatch.hsl();
            if !target.accepts(hsl.s, hsl.l) || used_colors.contains(&swatch.color()) {
                continue;
            }
            let value = create_comparison_value(swatch, target, max_population);
            if max.is_none() || value > max_value {
                max = Some(*swatch);
                max_value = value;
            }
        }

        max
    }

    /// All swatches, in the order the quantizer produced them
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Swatch with the largest population
    pub fn dominant_swatch(&self) -> Option<&Swatch> {
        self.dominant.as_ref()
    }

    /// Swatch selected for `target`. If several targets share its ranges, the one scored last
    /// wins.
    pub fn swatch(&self, target: &Target) -> Option<&Swatch> {
        self.selected
            .iter()
            .rev()
            .find(|(t, _)| t == target)
            .map(|(_, swatch)| swatch)
    }

    /// Targets that found a swatch, with their swatch
    pub fn selected(&self) -> impl Iterator<Item = (&Target, &Swatch)> + '_ {
        self.selected.iter().map(|(t, s)| (t, s))
    }

    /// Swatch for [`Target::LIGHT_VIBRANT`]
    pub fn light_vibrant_swatch(&self) -> Option<&Swatch> {
        self.swatch(&Target::LIGHT_VIBRANT)
    }

    /// Swatch for [`Target::VIBRANT`]
    pub fn vibrant_swatch(&self) -> Option<&Swatch> {
        self.swatch(&Target::VIBRANT)
    }

    /// Swatch for [`Target::DARK_VIBRANT`]
    pub fn dark_vibrant_swatch(&self) -> Option<&Swatch> {
        self.swatch(&Target::DARK_VIBRANT)
    }

    /// Swatch for [`Target::LIGHT_MUTED`]
    pub fn light_muted_swatch(&self) -> Option<&Swatch> {
        self.swatch(&Target::LIGHT_MUTED)
    }

    /// Swatch for [`Target::MUTED`]
    pub fn muted_swatch(&self) -> Option<&Swatch> {
        self.swatch(&Target::MUTED)
    }

    /// Swatch for [`Target::DARK_MUTED`]
    pub fn dark_muted_swatch(&self) -> Option<&Swatch> {
        self.swatch(&Target::DARK_MUTED)
    }

    /// Swatches ordered by descending population
    pub fn sort_by_frequency(&self) -> Vec<Swatch> {
        self.swatches
            .iter()
            .copied()
            .sorted_by_key(|swatch| std::cmp::Reverse(swatch.population()))
            .collect()
    }
}

fn invert_diff(val: f64, target_val: f64) -> f64 {
    1_f64 - (val - target_val).abs()
}

fn create_comparison_value(swatch: &Swatch, target: &Target, max_population: f64) -> f64 {
    let hsl = swatch.hsl();
    let weights = &target.weights;
    weights.saturation * invert_diff(hsl.s, target.saturation.target)
        + weights.lightness * invert_diff(hsl.l, target.lightness.target)
        + weights.population * (swatch.population() as f64 / max_population)
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Palette {{")?;

        macro_rules! display_color {
            ($formatter:expr, $name:expr, $swatch:expr) => {{
                write!($formatter, "\t{}", $name)?;
                if let Some(swatch) = $swatch {
                    write!($formatter, " Color: {}\t", swatch.color())?;
                    #[cfg(feature = "print-truecolor")]
                    {
                        let [r, g, b] = swatch.rgb().0;
                        write!(
                            $formatter,
                            "{}███{}",
                            color::Fg(color::Rgb(r, g, b)),
                            color::Fg(color::Reset)
                        )?;
                    }
                    writeln!($formatter)?;
                } else {
                    writeln!($formatter, " Color: None")?;
                }
            }};
        }

        display_color!(f, "Dominant", self.dominant_swatch());
        display_color!(f, "Light Vibrant", self.light_vibrant_swatch());
        display_color!(f, "Vibrant", self.vibrant_swatch());
        display_color!(f, "Dark Vibrant", self.dark_vibrant_swatch());
        display_color!(f, "Light Muted", self.light_muted_swatch());
        display_color!(f, "Muted", self.muted_swatch());
        display_color!(f, "Dark Muted", self.dark_muted_swatch());

        let swatches = self.sort_by_frequency().iter().join(" | ");
        writeln!(f, "\tSwatches: {}", swatches)?;

        write!(f, "}}")
    }
}
