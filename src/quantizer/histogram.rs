use std::collections::HashMap;

use itertools::Itertools;

use crate::ColorCode;

/// Occurrence count per color
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    counts: HashMap<ColorCode, usize>,
}

impl Histogram {
    /// Empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every color of `colors`
    pub fn from_colors(colors: impl IntoIterator<Item = ColorCode>) -> Self {
        Self {
            counts: colors.into_iter().counts(),
        }
    }

    /// Adds one occurrence of `color`
    pub fn insert(&mut self, color: ColorCode) {
        *self.counts.entry(color).or_insert(0) += 1;
    }

    /// Occurrences of `color`, 0 if it was never inserted
    pub fn count(&self, color: &ColorCode) -> usize {
        self.counts.get(color).copied().unwrap_or(0)
    }

    /// Whether `color` was inserted at least once
    pub fn contains(&self, color: &ColorCode) -> bool {
        self.counts.contains_key(color)
    }

    /// Distinct colors in ascending order
    pub fn elements(&self) -> Vec<ColorCode> {
        self.counts.keys().copied().sorted_unstable().collect()
    }

    /// Colors with their counts
    pub fn counted_elements(&self) -> &HashMap<ColorCode, usize> {
        &self.counts
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was inserted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of inserted colors, counting duplicates
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Colors of `colors` paired with their counts
    pub(crate) fn colors<'a>(
        &'a self,
        colors: &'a [ColorCode],
    ) -> impl Iterator<Item = (ColorCode, usize)> + 'a {
        colors.iter().map(move |color| (*color, self.count(color)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Width;

    #[test]
    fn counts_occurrences() {
        let a = ColorCode::from_rgb(1, 2, 3);
        let b = ColorCode::from_rgb(4, 5, 6);
        let c = ColorCode::from_rgb(7, 8, 9);
        let histogram = Histogram::from_colors(vec![a, b, a, a]);

        assert_eq!(histogram.count(&a), 3);
        assert_eq!(histogram.count(&b), 1);
        assert_eq!(histogram.count(&c), 0);
        assert!(histogram.contains(&b));
        assert!(!histogram.contains(&c));
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.total(), 4);
        assert_eq!(histogram.elements(), vec![a, b]);
    }

    #[test]
    fn insert_matches_bulk_construction() {
        let colors: Vec<ColorCode> = (0..500u32)
            .map(|i| ColorCode::from_storage(i * 7919 % 97, Width::Quantized))
            .collect();
        let mut histogram = Histogram::new();
        for &color in &colors {
            histogram.insert(color);
        }
        assert_eq!(histogram, Histogram::from_colors(colors.iter().copied()));
        assert_eq!(histogram.total(), colors.len());
        let sum: usize = histogram
            .elements()
            .iter()
            .map(|color| histogram.count(color))
            .sum();
        assert_eq!(sum, colors.len());
    }

    #[test]
    fn empty() {
        let histogram = Histogram::new();
        assert!(histogram.is_empty());
        assert!(histogram.elements().is_empty());
        assert_eq!(histogram.total(), 0);
    }
}
