use std::collections::HashSet;

use vibrant::{
    minimum_alpha_overlay, quantize, score, BoxedFilter, Builder, ColorCode, DefaultFilter,
    Swatch, Target,
};

fn rgba(pixels: &[([u8; 3], usize)]) -> Vec<u8> {
    pixels
        .iter()
        .flat_map(|&([r, g, b], count)| std::iter::repeat([r, g, b, 255]).take(count))
        .flatten()
        .collect()
}

/// Deterministic pseudo random pixels
fn noise(len: usize, seed: u32) -> Vec<ColorCode> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let [_, r, g, b] = state.to_be_bytes();
            ColorCode::from_rgb(r, g, b)
        })
        .collect()
}

fn default_filters() -> Vec<BoxedFilter> {
    vec![Box::new(DefaultFilter)]
}

#[test]
fn red_white_black_image() {
    let pixels = rgba(&[([255, 0, 0], 50), ([255, 255, 255], 30), ([0, 0, 0], 20)]);
    let palette = Builder::from_rgba(&pixels).generate().unwrap();

    assert_eq!(palette.swatches().len(), 1);
    let red = palette.swatches()[0];
    assert_eq!(red.population(), 50);
    assert_eq!(red.rgb().0, [248, 0, 0]);

    assert_eq!(palette.dominant_swatch(), Some(&red));
    assert_eq!(palette.vibrant_swatch(), Some(&red));
    assert!(palette.light_muted_swatch().is_none());
    assert!(palette.light_vibrant_swatch().is_none());
    assert!(palette.dark_vibrant_swatch().is_none());
}

#[test]
fn uniform_gray_image() {
    let pixels = rgba(&[([128, 128, 128], 64)]);
    let palette = Builder::from_rgba(&pixels).generate().unwrap();

    assert_eq!(palette.swatches().len(), 1);
    let gray = palette.swatches()[0];
    assert_eq!(gray.population(), 64);

    for target in &Target::DEFAULTS {
        let expected = if target.accepts(gray.hsl().s, gray.hsl().l) {
            Some(&gray)
        } else {
            None
        };
        assert_eq!(palette.swatch(target), expected, "{:?}", target);
    }
    assert_eq!(palette.muted_swatch(), Some(&gray));
}

#[test]
fn empty_image() {
    let palette = Builder::from_rgba(&[]).generate().unwrap();
    assert!(palette.swatches().is_empty());
    assert!(palette.dominant_swatch().is_none());
    assert_eq!(palette.selected().count(), 0);
}

#[test]
fn quantizer_respects_bound_and_population() {
    let colors = noise(5000, 7);
    let filters = default_filters();
    let passing = colors
        .iter()
        .map(|c| c.quantized().normalized())
        .filter(|c| vibrant::Filter::is_allowed(&DefaultFilter, c.rgb(), &c.hsl()))
        .count();

    for &max_colors in &[1, 2, 3, 8, 16, 32, 64] {
        let swatches = quantize(&colors, max_colors, &filters).unwrap();
        assert!(swatches.len() <= max_colors);
        let population: usize = swatches.iter().map(Swatch::population).sum();
        assert!(population <= passing, "{} > {}", population, passing);
        assert!(swatches.iter().all(|s| s.population() >= 1));
    }
}

#[test]
fn quantizer_keeps_every_color_when_allowed() {
    let colors = noise(300, 11);
    let distinct: HashSet<ColorCode> = colors.iter().map(|c| c.quantized()).collect();

    let swatches = quantize(&colors, distinct.len(), &[]).unwrap();
    assert_eq!(swatches.len(), distinct.len());
    for swatch in &swatches {
        let count = colors
            .iter()
            .filter(|c| c.quantized() == swatch.color().quantized())
            .count();
        assert_eq!(swatch.population(), count);
    }
}

#[test]
fn box_order_is_unspecified_but_content_is_stable() {
    let colors = noise(2000, 3);
    let mut reversed = colors.clone();
    reversed.reverse();

    let key = |s: &Swatch| (s.color(), s.population());
    let mut a = quantize(&colors, 16, &[]).unwrap();
    let mut b = quantize(&reversed, 16, &[]).unwrap();
    a.sort_by_key(key);
    b.sort_by_key(key);
    assert_eq!(a, b);
}

#[test]
fn exclusive_targets_pick_distinct_colors() {
    let colors = noise(8000, 42);
    let swatches = quantize(&colors, 24, &default_filters()).unwrap();
    let palette = score(swatches, &Target::DEFAULTS);

    let selected: Vec<ColorCode> = palette.selected().map(|(_, s)| s.color()).collect();
    let unique: HashSet<ColorCode> = selected.iter().copied().collect();
    assert_eq!(selected.len(), unique.len());

    for (target, swatch) in palette.selected() {
        assert!(target.accepts(swatch.hsl().s, swatch.hsl().l));
    }
}

#[test]
fn custom_target() {
    let pixels = rgba(&[([40, 160, 40], 10), ([40, 40, 160], 30)]);
    let greenish = Target::builder()
        .minimum_saturation(0.2)
        .target_lightness(0.4)
        .population_weight(0.0)
        .build();
    let palette = Builder::from_rgba(&pixels)
        .clear_targets()
        .add_target(greenish)
        .generate()
        .unwrap();
    // Identical saturation and lightness, population ignored: the first swatch in
    // ascending color order wins the tie
    let picked = palette.swatch(&greenish).unwrap();
    assert_eq!(picked.rgb().0, [40, 40, 160]);
}

#[test]
fn text_overlay_for_selected_swatch() {
    let pixels = rgba(&[([30, 60, 160], 10)]);
    let palette = Builder::from_rgba(&pixels).generate().unwrap();
    let swatch = palette.dominant_swatch().unwrap();
    let [r, g, b] = swatch.rgb().0;
    let overlay = minimum_alpha_overlay(image::Rgba([r, g, b, 255]), 4.5).unwrap();
    assert_eq!(overlay.color.0, [255, 255, 255]);
    assert!(overlay.alpha <= 1.0);
    assert_eq!(swatch.text_colors().body, overlay);
}
