use std::thread::{self, JoinHandle};

use image::{
    imageops::{resize, FilterType},
    GenericImageView, Pixel,
};
use log::debug;

use crate::{
    quantize, settings, BoxedFilter, ColorCode, DefaultFilter, Filter, Palette, Result, Swatch,
    Target,
};

enum Source {
    Colors(Vec<ColorCode>),
    Swatches(Vec<Swatch>),
}

/// Configures and runs palette generation
pub struct Builder {
    source: Source,
    max_color_count: usize,
    filters: Vec<BoxedFilter>,
    targets: Vec<Target>,
}

impl Builder {
    fn with_source(source: Source) -> Self {
        Self {
            source,
            max_color_count: settings::DEFAULT_MAX_COLOR_COUNT,
            filters: vec![Box::new(DefaultFilter)],
            targets: Target::DEFAULTS.to_vec(),
        }
    }

    /// Reads rows of alpha-premultiplied RGBA bytes. A trailing partial pixel is ignored.
    pub fn from_rgba(pixels: &[u8]) -> Self {
        let colors = pixels
            .chunks_exact(4)
            .map(|p| ColorCode::from_premultiplied([p[0], p[1], p[2], p[3]]))
            .collect();
        Self::with_source(Source::Colors(colors))
    }

    /// Samples an image, scaling it down first if its area exceeds
    /// [`DEFAULT_RESIZE_AREA`](crate::DEFAULT_RESIZE_AREA)
    pub fn from_image<I, P>(image: &I) -> Self
    where
        P: Pixel<Subpixel = u8> + 'static,
        I: GenericImageView<Pixel = P>,
    {
        Self::from_image_with_area(image, settings::DEFAULT_RESIZE_AREA)
    }

    /// Samples an image, scaling it down first if its area exceeds `resize_area` pixels.
    /// An area of 0 disables scaling.
    pub fn from_image_with_area<I, P>(image: &I, resize_area: u32) -> Self
    where
        P: Pixel<Subpixel = u8> + 'static,
        I: GenericImageView<Pixel = P>,
    {
        let (width, height) = image.dimensions();
        let area = width as u64 * height as u64;
        let colors: Vec<ColorCode> = if resize_area > 0 && area > resize_area as u64 {
            let ratio = (resize_area as f64 / area as f64).sqrt();
            let width = (ratio * width as f64).ceil() as u32;
            let height = (ratio * height as f64).ceil() as u32;
            debug!(
                "scaling {}x{} image down to {}x{}",
                image.width(),
                image.height(),
                width,
                height
            );
            resize(image, width, height, FilterType::Lanczos3)
                .pixels()
                .map(|p| color_of(p.to_rgba().0))
                .collect()
        } else {
            image.pixels().map(|(_, _, p)| color_of(p.to_rgba().0)).collect()
        };
        Self::with_source(Source::Colors(colors))
    }

    /// Scores already quantized swatches. The filters are not applied to them, and they are
    /// scored against [`Target::DEFAULTS`] unless the targets are replaced.
    pub fn from_swatches(swatches: Vec<Swatch>) -> Self {
        Self::with_source(Source::Swatches(swatches))
    }

    /// Largest number of swatches the quantizer may produce
    pub fn max_color_count(mut self, count: usize) -> Self {
        self.max_color_count = count;
        self
    }

    /// Drops all filters, including the default one
    pub fn clear_filters(mut self) -> Self {
        self.filters.clear();
        self
    }

    /// Adds a filter every sampled color and swatch has to pass
    pub fn add_filter(mut self, filter: impl Filter + Send + Sync + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Drops all targets, including the default ones
    pub fn clear_targets(mut self) -> Self {
        self.targets.clear();
        self
    }

    /// Adds a target, scored after the ones already added
    pub fn add_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Quantizes the colors and scores the swatches
    pub fn generate(&self) -> Result<Palette> {
        let swatches = match &self.source {
            Source::Colors(colors) => quantize(colors, self.max_color_count, &self.filters)?,
            Source::Swatches(swatches) => swatches.clone(),
        };
        Ok(Palette::new(swatches, &self.targets))
    }

    /// Runs [`generate`](Self::generate) on a new thread
    pub fn spawn(self) -> JoinHandle<Result<Palette>> {
        thread::spawn(move || self.generate())
    }
}

/// Image buffers carry straight alpha. Premultiplying first turns fully transparent pixels
/// black, which the default filter drops.
fn color_of([r, g, b, a]: [u8; 4]) -> ColorCode {
    let premultiply = |c: u8| (c as u32 * a as u32 / 255) as u8;
    ColorCode::from_premultiplied([premultiply(r), premultiply(g), premultiply(b), a])
}
