use num::complex::Complex;

#[derive(Clone, Copy, Debug)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// A fixed window onto the complex plane.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cx_min: f64,
    pub cx_max: f64,
    pub cy_min: f64,
    pub cy_max: f64,
}

impl Viewport {
    /// Affine map from a pixel coordinate to the complex point it samples.
    ///
    /// Pixel `(0, 0)` is the top-left corner `(cx_min, cy_min)`; pixel
    /// `(width - 1, height - 1)` is `(cx_max, cy_max)`.
    pub fn point(&self, x: u32, y: u32, size: Size) -> Complex<f64> {
        let re = self.cx_min + x as f64 / (size.width - 1) as f64 * (self.cx_max - self.cx_min);
        let im = self.cy_min + y as f64 / (size.height - 1) as f64 * (self.cy_max - self.cy_min);
        Complex::new(re, im)
    }
}
