use num::complex::Complex;

use crate::colour;
use crate::pixel::Pixel;
use crate::viewport::{Size, Viewport};

/// Everything needed to render one frame. Immutable for the program's
/// lifetime; shared by reference across all workers.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub size: Size,
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub escape_radius: f64,
}

impl Settings {
    /// Render one complete row of pixels.
    ///
    /// Pure and deterministic: safe to call concurrently for different rows,
    /// and two calls for the same row yield identical output regardless of
    /// thread count or scheduling.
    pub fn render_row(&self, y: u32) -> Vec<Pixel> {
        (0..self.size.width)
            .map(|x| {
                let c = self.viewport.point(x, y, self.size);
                let iterations = escape_time(c, self.max_iterations, self.escape_radius);
                colour::colour_pixel(iterations, self.max_iterations)
            })
            .collect()
    }
}

/// Count applications of `z ← z² + c` (from `z₀ = 0`) until `|z|` exceeds
/// `radius` or the count reaches `max_iterations`.
pub fn escape_time(c: Complex<f64>, max_iterations: u32, radius: f64) -> u32 {
    let mut z = Complex::new(0.0, 0.0);
    let mut n = 0;

    // Squaring is direct multiplication, not a generic power function.
    while n < max_iterations && z.norm() <= radius {
        z = z * z + c;
        n += 1;
    }

    n
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Settings {
        Settings {
            size: Size {
                width: 3,
                height: 2,
            },
            viewport: Viewport {
                cx_min: -2.0,
                cx_max: 1.0,
                cy_min: -1.0,
                cy_max: 1.0,
            },
            max_iterations: 10,
            escape_radius: 2.0,
        }
    }

    #[test]
    fn interior_point_reaches_iteration_cap() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 10, 2.0), 10);
    }

    #[test]
    fn far_point_escapes_after_one_application() {
        // c = (-2, -1) has |c| ≈ 2.24 > 2, so z₁ = c already escapes.
        assert_eq!(escape_time(Complex::new(-2.0, -1.0), 10, 2.0), 1);
    }

    #[test]
    fn render_row_is_deterministic() {
        let settings = scenario();
        assert_eq!(settings.render_row(0), settings.render_row(0));
        assert_eq!(settings.render_row(1), settings.render_row(1));
    }

    #[test]
    fn scenario_top_left_pixel_has_low_channel_value() {
        let row = scenario().render_row(0);
        assert_eq!(row.len(), 3);
        // Escape at iteration 1 of 10: floor(255 / 10) = 25.
        assert_eq!(row[0], Pixel { r: 0, g: 25, b: 25 });
    }
}
