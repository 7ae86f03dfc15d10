//! Escape-time evaluation of the Mandelbrot recurrence `z <- z^2 + c`.

use crate::pixel::Complex;

/// Squared escape radius; comparing against `|z|^2` avoids a square root.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z <- z^2 + c` from `z = 0` and returns the iteration on which
/// `|z|^2` first exceeded [`ESCAPE_RADIUS_SQUARED`], or `max_iterations` if it never did.
///
/// At least one iteration always runs, so the result lies in
/// `1..=max_iterations` whenever `max_iterations > 0`.
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut magnitude_squared = 0.0;
    let mut iteration = 0;

    while iteration < max_iterations && magnitude_squared <= ESCAPE_RADIUS_SQUARED {
        iteration += 1;

        z = Complex {
            real: z.real * z.real - z.imaginary * z.imaginary + c.real,
            imaginary: 2.0 * z.real * z.imaginary + c.imaginary,
        };
        magnitude_squared = z.real * z.real + z.imaginary * z.imaginary;
    }

    iteration
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_ITERATIONS: u32 = 1000;

    fn point(real: f64, imaginary: f64) -> Complex {
        Complex { real, imaginary }
    }

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::ZERO, MAX_ITERATIONS), MAX_ITERATIONS);
    }

    #[test]
    fn tip_of_the_set_never_escapes() {
        // z settles on 2, whose squared magnitude sits exactly on the threshold.
        assert_eq!(escape_time(point(-2.0, 0.0), MAX_ITERATIONS), MAX_ITERATIONS);
    }

    #[test]
    fn far_point_escapes_on_first_iteration() {
        // z1 = 2 + 2i, |z1|^2 = 8
        assert_eq!(escape_time(point(2.0, 2.0), MAX_ITERATIONS), 1);
    }

    #[test]
    fn one_escapes_on_third_iteration() {
        // 1, 2, 5
        assert_eq!(escape_time(point(1.0, 0.0), MAX_ITERATIONS), 3);
    }

    #[test]
    fn half_escapes_on_fifth_iteration() {
        assert_eq!(escape_time(point(0.5, 0.0), MAX_ITERATIONS), 5);
    }

    #[test]
    fn zero_limit_runs_no_iterations() {
        assert_eq!(escape_time(point(2.0, 2.0), 0), 0);
    }

    #[test]
    fn result_is_bounded_by_limit() {
        for step in 0..=40 {
            let real = -2.5 + step as f64 * 0.1;
            for imaginary in [-1.2, -0.6, 0.0, 0.35, 1.1] {
                let iterations = escape_time(point(real, imaginary), 50);
                assert!((1..=50).contains(&iterations), "{real} {imaginary}");
            }
        }
    }
}
