//! Colouring: the hue-wheel gradient and escape-count statistics.

use fnv::FnvHashMap;
use log::trace;

/// Floating-point colour, before truncation into a [`Pixel`](crate::pixel::Pixel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    Red,
    Green,
    Blue,
}

impl Rgb {
    fn set(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }
}

/// Width of one hue sector, in degrees.
pub const SECTOR_WIDTH: f64 = 60.0;

/// A 60 degree slice of the hue wheel. One channel is interpolated as
/// `slope * hue + max_coefficient * max + min_coefficient * min`, the other two are pinned.
struct Sector {
    /// Exclusive upper hue bound. The final sector catches everything else.
    upper: f64,
    interpolated: Channel,
    rising: bool,
    max_coefficient: f64,
    min_coefficient: f64,
    at_max: Channel,
    at_min: Channel,
}

static SECTORS: [Sector; 6] = [
    // red -> yellow
    Sector {
        upper: 60.0,
        interpolated: Channel::Green,
        rising: true,
        max_coefficient: 0.0,
        min_coefficient: 1.0,
        at_max: Channel::Red,
        at_min: Channel::Blue,
    },
    // yellow -> green
    Sector {
        upper: 120.0,
        interpolated: Channel::Red,
        rising: false,
        max_coefficient: 2.0,
        min_coefficient: 1.0,
        at_max: Channel::Green,
        at_min: Channel::Blue,
    },
    // green -> cyan
    Sector {
        upper: 180.0,
        interpolated: Channel::Blue,
        rising: true,
        max_coefficient: -2.0,
        min_coefficient: 1.0,
        at_max: Channel::Green,
        at_min: Channel::Red,
    },
    // cyan -> blue
    Sector {
        upper: 240.0,
        interpolated: Channel::Green,
        rising: false,
        max_coefficient: 4.0,
        min_coefficient: 1.0,
        at_max: Channel::Blue,
        at_min: Channel::Red,
    },
    // blue -> magenta
    Sector {
        upper: 300.0,
        interpolated: Channel::Red,
        rising: true,
        max_coefficient: -4.0,
        min_coefficient: 1.0,
        at_max: Channel::Blue,
        at_min: Channel::Green,
    },
    // magenta -> red. Unlike the other sectors, the offset carries no `min` term.
    Sector {
        upper: f64::INFINITY,
        interpolated: Channel::Blue,
        rising: false,
        max_coefficient: 6.0,
        min_coefficient: 0.0,
        at_max: Channel::Red,
        at_min: Channel::Green,
    },
];

fn sector(hue: f64) -> &'static Sector {
    // Strict `<` against each bound: negative hues land in the first sector,
    // and hues of 300 or more (and NaN) in the last.
    let index = SECTORS
        .iter()
        .position(|sector| hue < sector.upper)
        .unwrap_or(SECTORS.len() - 1);
    &SECTORS[index]
}

/**
Piecewise-linear colour gradient around the hue wheel
([Wikipedia](https://en.wikipedia.org/wiki/HSL_and_HSV)).

`hue` is in degrees and is expected in `[0, 360)`; it is not validated.
`min` and `max` are the channel intensity floor and ceiling.

With `min = 0` the gradient is continuous. A non-zero `min` leaves small
jumps at the sector boundaries, at most `5 * min` at 300 degrees.
*/
pub fn gradient(hue: f64, min: f64, max: f64) -> Rgb {
    let sector = sector(hue);
    let slope = if sector.rising {
        (max - min) / SECTOR_WIDTH
    } else {
        (min - max) / SECTOR_WIDTH
    };

    let mut colour = Rgb {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };
    colour.set(sector.at_max, max);
    colour.set(sector.at_min, min);
    colour.set(
        sector.interpolated,
        slope * hue + sector.max_coefficient * max + sector.min_coefficient * min,
    );
    colour
}

/// Hue for an escape count: `colour_max` for zero iterations, falling linearly to
/// `colour_max - gradient_colour_max` at `max_iterations`.
///
/// The ratio is taken in single precision; existing images depend on the exact rounding.
pub fn hue(iterations: u32, max_iterations: u32, colour_max: f64, gradient_colour_max: f64) -> f64 {
    let ratio = iterations as f32 / max_iterations as f32;
    colour_max - f64::from(ratio) * gradient_colour_max
}

/// How many pixels finished on each iteration count.
#[derive(Clone, Debug, Default)]
pub struct EscapeHistogram {
    total_samples: usize,
    histogram: FnvHashMap<u32, u32>,
}

impl EscapeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, iterations: u32) {
        *self.histogram.entry(iterations).or_insert(0) += 1;
        self.total_samples += 1;
    }

    /// Fold `other` into `self`.
    pub fn merge(&mut self, other: EscapeHistogram) {
        trace!("merging {} samples", other.total_samples);

        for (iterations, count) in other.histogram {
            *self.histogram.entry(iterations).or_insert(0) += count;
        }
        self.total_samples += other.total_samples;

        debug_assert_eq!(
            self.total_samples,
            self.histogram.values().map(|value| *value as usize).sum()
        );
    }

    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    pub fn count(&self, iterations: u32) -> u32 {
        self.histogram.get(&iterations).copied().unwrap_or(0)
    }

    /// Sorted, distinct iteration counts that were recorded.
    pub fn bucket_labels(&self) -> Vec<u32> {
        let mut labels: Vec<u32> = self.histogram.keys().copied().collect();
        labels.sort_unstable();
        labels
    }

    /// Smallest and largest count among the pixels that escaped before `max_iterations`.
    pub fn escaped_range(&self, max_iterations: u32) -> Option<(u32, u32)> {
        let mut escaped = self
            .histogram
            .keys()
            .copied()
            .filter(|iterations| *iterations < max_iterations);
        let first = escaped.next()?;
        Some(escaped.fold((first, first), |(low, high), iterations| {
            (low.min(iterations), high.max(iterations))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f64 = 1.0;
    const MAX: f64 = 255.0;

    fn max_difference(a: Rgb, b: Rgb) -> f64 {
        (a.red - b.red)
            .abs()
            .max((a.green - b.green).abs())
            .max((a.blue - b.blue).abs())
    }

    #[test]
    fn zero_hue_is_red() {
        assert_eq!(
            gradient(0.0, MIN, MAX),
            Rgb {
                red: 255.0,
                green: 1.0,
                blue: 1.0
            }
        );
    }

    #[test]
    fn hue_180_follows_fourth_sector() {
        // -254 / 60 * 180 + 4 * 255 + 1
        assert_eq!(
            gradient(180.0, MIN, MAX),
            Rgb {
                red: 1.0,
                green: 259.0,
                blue: 255.0
            }
        );
    }

    #[test]
    fn boundaries_belong_to_the_upper_sector() {
        let at_60 = gradient(60.0, MIN, MAX);
        assert_eq!(at_60.green, MAX);
        assert_eq!(at_60.blue, MIN);

        let at_300 = gradient(300.0, MIN, MAX);
        assert_eq!(at_300.red, MAX);
        assert_eq!(at_300.green, MIN);
    }

    #[test]
    fn last_sector_omits_min_offset() {
        let colour = gradient(330.0, MIN, MAX);
        assert_eq!(colour.blue, (MIN - MAX) / 60.0 * 330.0 + 6.0 * MAX);
    }

    #[test]
    fn out_of_range_hues_use_outer_sectors() {
        let negative = gradient(-30.0, MIN, MAX);
        assert_eq!(negative.red, MAX);
        assert!(negative.green < MIN);

        let wrapped = gradient(400.0, MIN, MAX);
        assert_eq!(wrapped.red, MAX);
        assert_eq!(wrapped.green, MIN);

        let nan = gradient(f64::NAN, MIN, MAX);
        assert_eq!(nan.red, MAX);
        assert_eq!(nan.green, MIN);
    }

    #[test]
    fn continuous_at_boundaries_without_floor() {
        for boundary in [60.0, 120.0, 180.0, 240.0, 300.0] {
            let before = gradient(boundary - 1e-9, 0.0, MAX);
            let after = gradient(boundary, 0.0, MAX);
            assert!(max_difference(before, after) < 1e-6, "{boundary}");
        }
    }

    #[test]
    fn jumps_with_floor_are_bounded() {
        for boundary in [60.0, 120.0, 180.0, 240.0, 300.0] {
            let before = gradient(boundary - 1e-9, MIN, MAX);
            let after = gradient(boundary, MIN, MAX);
            assert!(max_difference(before, after) <= 5.0 * MIN + 1e-6, "{boundary}");
        }
    }

    #[test]
    fn interior_is_linear() {
        let colour = gradient(30.0, 0.0, 240.0);
        assert_eq!(colour.green, 120.0);
    }

    #[test]
    fn hue_spans_configured_range() {
        assert_eq!(hue(0, 1000, 240.0, 230.0), 240.0);
        assert_eq!(hue(1000, 1000, 240.0, 230.0), 10.0);
        assert_eq!(hue(500, 1000, 240.0, 230.0), 125.0);
    }

    #[test]
    fn hue_ratio_is_single_precision() {
        let expected = 240.0 - f64::from(1.0f32 / 1000.0f32) * 230.0;
        assert_eq!(hue(1, 1000, 240.0, 230.0), expected);
        assert_ne!(hue(1, 1000, 240.0, 230.0), 240.0 - 0.001 * 230.0);
    }

    #[test]
    fn histogram_counts_and_merges() {
        let mut first = EscapeHistogram::new();
        first.record(3);
        first.record(3);
        first.record(1000);

        let mut second = EscapeHistogram::new();
        second.record(7);
        second.record(3);

        first.merge(second);

        assert_eq!(first.total_samples(), 5);
        assert_eq!(first.count(3), 3);
        assert_eq!(first.count(4), 0);
        assert_eq!(first.bucket_labels(), vec![3, 7, 1000]);
        assert_eq!(first.escaped_range(1000), Some((3, 7)));
    }

    #[test]
    fn histogram_without_escapes_has_no_range() {
        let mut histogram = EscapeHistogram::new();
        histogram.record(50);
        assert_eq!(histogram.escaped_range(50), None);
    }
}
