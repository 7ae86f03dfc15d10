//! Render configuration.

use std::path::PathBuf;

use crate::{
    colour,
    pixel::{Complex, Pixel},
    screen,
};

/// Pixels per unit on the complex plane.
pub const RESOLUTION: f64 = 8700.0;
pub const X_CENTER: f64 = -0.55;
pub const Y_CENTER: f64 = 0.6;
pub const MAX_ITERATIONS: u32 = 1000;
pub const WIDTH: u32 = 1920;
pub const HEIGHT: u32 = 1080;

/// Gradient channel ceiling.
pub const COLOUR_DEPTH: f64 = 255.0;
/// Gradient channel floor.
pub const COLOUR_MIN: f64 = 1.0;
/// Hue, in degrees, of a pixel that escaped immediately.
pub const COLOUR_MAX: f64 = 240.0;
/// How far the hue travels between zero and `MAX_ITERATIONS` iterations.
pub const GRADIENT_COLOUR_MAX: f64 = 230.0;

pub const FILENAME: &str = "my_mandelbrot_fractal.bmp";

/// Everything a render depends on. Fixed before rendering starts.
#[derive(Clone, Debug)]
pub struct Config {
    pub resolution: f64,
    pub x_center: f64,
    pub y_center: f64,
    pub max_iterations: u32,
    pub size: screen::Size,
    pub colour_depth: f64,
    pub colour_min: f64,
    pub colour_max: f64,
    pub gradient_colour_max: f64,
    pub filename: PathBuf,
    /// Render workers. `1` keeps the whole render on the calling thread.
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: RESOLUTION,
            x_center: X_CENTER,
            y_center: Y_CENTER,
            max_iterations: MAX_ITERATIONS,
            size: screen::Size {
                width: WIDTH,
                height: HEIGHT,
            },
            colour_depth: COLOUR_DEPTH,
            colour_min: COLOUR_MIN,
            colour_max: COLOUR_MAX,
            gradient_colour_max: GRADIENT_COLOUR_MAX,
            filename: PathBuf::from(FILENAME),
            threads: num_cpus::get(),
        }
    }
}

impl Config {
    /// Pixel offsets that put the centre pixel on `(x_center, y_center)`.
    ///
    /// Integer division: an even dimension's half-pixel is dropped, so the
    /// centre of a 1920x1080 image is pixel `(959, 539)`.
    pub fn offsets(&self) -> (i64, i64) {
        let x_offset = -((i64::from(self.size.width) - 1) / 2);
        let y_offset = (i64::from(self.size.height) - 1) / 2;
        (x_offset, y_offset)
    }

    /// The plane point under pixel `(col, row)`. Rows grow downwards while the
    /// imaginary axis grows upwards.
    pub fn pixel_to_point(&self, col: u32, row: u32) -> Complex {
        let (x_offset, y_offset) = self.offsets();
        Complex {
            real: self.x_center + (x_offset + i64::from(col)) as f64 / self.resolution,
            imaginary: self.y_center + (y_offset - i64::from(row)) as f64 / self.resolution,
        }
    }

    /// Colour for a pixel that finished after `iterations`.
    pub fn colour(&self, iterations: u32) -> Pixel {
        let hue = colour::hue(
            iterations,
            self.max_iterations,
            self.colour_max,
            self.gradient_colour_max,
        );
        colour::gradient(hue, self.colour_min, self.colour_depth).into()
    }
}
