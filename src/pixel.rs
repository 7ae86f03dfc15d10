use bytemuck::{Pod, Zeroable};

use crate::colour::Rgb;

/// A point on the complex plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };
}

/// One stored raster cell, laid out as the RGBA bytes handed to the encoder.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    pub const OPAQUE: u8 = u8::MAX;
}

impl From<Rgb> for Pixel {
    /// Truncates toward zero, saturating at the channel bounds.
    fn from(colour: Rgb) -> Self {
        Self {
            red: colour.red as u8,
            green: colour.green as u8,
            blue: colour.blue as u8,
            alpha: Self::OPAQUE,
        }
    }
}
