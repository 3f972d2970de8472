use log::{debug, trace};

use crate::color::Channel;
use crate::filter::{self, BoxedFilter};
use crate::queue::PriorityQueue;
use crate::{ColorCode, Error, Histogram, Quantizer, Result, Swatch, Width};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
struct Rgb<T> {
    r: T,
    g: T,
    b: T,
}

impl<T> Rgb<T> {
    fn map<O>(self, mut f: impl FnMut(T) -> O) -> Rgb<O> {
        Rgb {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    fn as_mut(&mut self) -> Rgb<&mut T> {
        Rgb {
            r: &mut self.r,
            g: &mut self.g,
            b: &mut self.b,
        }
    }

    fn zip<O>(self, other: Rgb<O>) -> Rgb<(T, O)> {
        Rgb {
            r: (self.r, other.r),
            g: (self.g, other.g),
            b: (self.b, other.b),
        }
    }
}

impl From<ColorCode> for Rgb<u8> {
    fn from(color: ColorCode) -> Self {
        let [r, g, b] = color.components();
        Rgb { r, g, b }
    }
}

#[derive(Debug, Copy, Clone)]
struct MinMax<T> {
    min: T,
    max: T,
}

impl<T: Ord + Copy> MinMax<T> {
    fn from_value(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    fn extend(&mut self, value: T) {
        if value < self.min {
            self.min = value;
        }
        if self.max < value {
            self.max = value;
        }
    }
}

impl MinMax<u8> {
    fn len(&self) -> usize {
        (self.max - self.min) as usize + 1
    }
}

#[derive(Debug, Copy, Clone)]
struct Bounds(Rgb<MinMax<u8>>);

impl Bounds {
    fn new(color: ColorCode) -> Self {
        Self(Rgb::<u8>::from(color).map(MinMax::from_value))
    }

    fn extend(&mut self, color: ColorCode) {
        self.0
            .as_mut()
            .zip(Rgb::<u8>::from(color))
            .map(|(mm, c)| mm.extend(c));
    }

    fn volume(&self) -> usize {
        self.0.r.len() * self.0.g.len() * self.0.b.len()
    }

    fn longest_channel(&self) -> Channel {
        let r = self.0.r.len();
        let g = self.0.g.len();
        let b = self.0.b.len();
        if r >= g && r >= b {
            Channel::Red
        } else if g >= r && g >= b {
            Channel::Green
        } else {
            Channel::Blue
        }
    }
}

/// Inclusive index range `lower..=upper` of the distinct color array
#[derive(Debug, Clone)]
struct VBox {
    lower: usize,
    upper: usize,
    bounds: Bounds,
    population: usize,
}

impl VBox {
    fn from_range(
        lower: usize,
        upper: usize,
        colors: &[ColorCode],
        histogram: &Histogram,
    ) -> Self {
        debug_assert!(lower <= upper && upper < colors.len());
        let mut vbox = Self {
            lower,
            upper,
            bounds: Bounds::new(colors[lower]),
            population: 0,
        };
        vbox.fit(colors, histogram);
        vbox
    }

    fn fit(&mut self, colors: &[ColorCode], histogram: &Histogram) {
        let mut bounds = Bounds::new(colors[self.lower]);
        let mut population = 0;
        for (color, count) in histogram.colors(&colors[self.lower..=self.upper]) {
            bounds.extend(color);
            population += count;
        }
        self.bounds = bounds;
        self.population = population;
    }

    fn color_count(&self) -> usize {
        self.upper - self.lower + 1
    }

    fn can_split(&self) -> bool {
        self.color_count() > 1
    }

    fn volume(&self) -> usize {
        self.bounds.volume()
    }

    /// Shrinks this box to the lower half and returns the upper half
    fn split(&mut self, colors: &mut [ColorCode], histogram: &Histogram) -> Option<VBox> {
        if !self.can_split() {
            return None;
        }
        let split_point = self.find_split_point(colors, histogram);
        let upper_half = VBox::from_range(split_point + 1, self.upper, colors, histogram);
        self.upper = split_point;
        self.fit(colors, histogram);
        Some(upper_half)
    }

    /// Orders the box along its longest channel and returns the last index of the lower half
    fn find_split_point(&self, colors: &mut [ColorCode], histogram: &Histogram) -> usize {
        let channel = self.bounds.longest_channel();
        let range = &mut colors[self.lower..=self.upper];
        range.sort_unstable_by_key(|color| color.with_leading(channel));

        let mid_point = self.population / 2;
        let mut count = 0;
        for (offset, (_, population)) in histogram.colors(range).enumerate() {
            count += population;
            if count >= mid_point {
                return (self.lower + offset).min(self.upper - 1);
            }
        }
        self.lower
    }

    fn average(&self, colors: &[ColorCode], histogram: &Histogram) -> Swatch {
        let init = (Rgb::<usize>::default(), 0);
        let (sum, population) = histogram
            .colors(&colors[self.lower..=self.upper])
            .fold(init, |(acc_c, acc_p), (color, count)| {
                let color = acc_c
                    .zip(Rgb::<u8>::from(color))
                    .map(|(a, c)| a + count * c as usize);
                (color, acc_p + count)
            });
        let mean = sum.map(|c| (c as f64 / population as f64).round() as u32);
        Swatch::new(
            ColorCode::from_components([mean.r, mean.g, mean.b], Width::Quantized),
            population,
        )
    }
}

/// Queue entry pointing into the box arena
#[derive(Debug, Copy, Clone, PartialEq)]
struct Entry {
    vbox: usize,
    volume: usize,
}

fn split_boxes<F: Fn(&Entry, &Entry) -> bool>(
    queue: &mut PriorityQueue<Entry, F>,
    boxes: &mut Vec<VBox>,
    colors: &mut [ColorCode],
    histogram: &Histogram,
    target: usize,
) {
    while queue.len() < target {
        let entry = match queue.dequeue() {
            Some(entry) => entry,
            None => return,
        };
        let vbox = &mut boxes[entry.vbox];
        match vbox.split(colors, histogram) {
            Some(upper_half) => {
                let lower_half = Entry {
                    vbox: entry.vbox,
                    volume: vbox.volume(),
                };
                trace!(
                    "split box {} at {} into volumes {} and {}",
                    entry.vbox,
                    vbox.upper,
                    lower_half.volume,
                    upper_half.volume()
                );
                queue.enqueue(Entry {
                    vbox: boxes.len(),
                    volume: upper_half.volume(),
                });
                boxes.push(upper_half);
                queue.enqueue(lower_half);
            }
            None => {
                // Largest box holds a single color, nothing left to split
                queue.enqueue(entry);
                return;
            }
        }
    }
}

/// Median cut quantizer
///
/// Splits the box with the largest volume in color space at its population median until the
/// requested number of boxes is reached, then averages every box into a swatch.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianCut;

impl Quantizer for MedianCut {
    fn quantize(
        &self,
        colors: &[ColorCode],
        max_colors: usize,
        filters: &[BoxedFilter],
    ) -> Result<Vec<Swatch>> {
        if max_colors == 0 {
            return Err(Error::ZeroColorCount);
        }

        let histogram = Histogram::from_colors(colors.iter().map(|c| c.quantized()).filter(|c| {
            let color = c.normalized();
            filter::is_allowed(filters, color.rgb(), &color.hsl())
        }));
        let mut distinct_colors = histogram.elements();
        debug!(
            "{} distinct colors in {} of {} samples",
            distinct_colors.len(),
            histogram.total(),
            colors.len()
        );

        if distinct_colors.len() <= max_colors {
            return Ok(distinct_colors
                .into_iter()
                .map(|color| Swatch::new(color, histogram.count(&color)))
                .collect());
        }

        let first = VBox::from_range(0, distinct_colors.len() - 1, &distinct_colors, &histogram);
        let mut queue = PriorityQueue::new(|a: &Entry, b: &Entry| a.volume > b.volume);
        queue.enqueue(Entry {
            vbox: 0,
            volume: first.volume(),
        });
        let mut boxes = vec![first];
        split_boxes(
            &mut queue,
            &mut boxes,
            &mut distinct_colors,
            &histogram,
            max_colors,
        );

        let swatches: Vec<Swatch> = queue
            .elements()
            .iter()
            .map(|entry| boxes[entry.vbox].average(&distinct_colors, &histogram))
            .filter(|swatch| filter::is_allowed(filters, swatch.rgb(), swatch.hsl()))
            .collect();
        debug!(
            "median cut produced {} boxes, {} swatches survived filtering",
            queue.len(),
            swatches.len()
        );
        Ok(swatches)
    }
}
