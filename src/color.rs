//! Stroke and fill colours.

use std::fmt;

/// An HSL colour with optional alpha, printed the way a 2D canvas
/// `strokeStyle` string would spell it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Degrees; any value, wrapped into [0, 360) on conversion.
    pub hue: f64,
    /// Percent.
    pub saturation: f64,
    /// Percent.
    pub lightness: f64,
    pub alpha: Option<f64>,
}

impl Hsla {
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: None,
        }
    }

    pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: Some(alpha),
        }
    }

    pub fn opacity(&self) -> f64 {
        self.alpha.unwrap_or(1.0).clamp(0.0, 1.0)
    }

    /// Convert to straight (non-premultiplied) RGB in `0.0..=1.0`.
    pub fn to_rgb(&self) -> (f64, f64, f64) {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        (r + m, g + m, b + m)
    }

    /// Premultiplied RGBA, ready for compositing.
    pub fn to_premultiplied(&self) -> Rgba {
        let (r, g, b) = self.to_rgb();
        let a = self.opacity();
        Rgba::new(r * a, g * a, b * a, a)
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha {
            Some(a) => write!(
                f,
                "hsla({}, {}%, {}%, {})",
                self.hue, self.saturation, self.lightness, a
            ),
            None => write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness),
        }
    }
}

/// Premultiplied RGBA, every channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Black at the given opacity (premultiplied black is all zeros but alpha).
    pub const fn black(alpha: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn test_css_strings() {
        assert_eq!(Hsla::hsl(120.0, 100.0, 60.0).to_string(), "hsl(120, 100%, 60%)");
        assert_eq!(
            Hsla::hsla(30.5, 100.0, 55.0, 0.25).to_string(),
            "hsla(30.5, 100%, 55%, 0.25)"
        );
    }

    #[test]
    fn test_primary_hues() {
        assert!(approx(Hsla::hsl(0.0, 100.0, 50.0).to_rgb(), (1.0, 0.0, 0.0)));
        assert!(approx(Hsla::hsl(120.0, 100.0, 50.0).to_rgb(), (0.0, 1.0, 0.0)));
        assert!(approx(Hsla::hsl(240.0, 100.0, 50.0).to_rgb(), (0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_hue_wraps_like_css() {
        // Spark hues may land outside [0, 360)
        assert!(approx(
            Hsla::hsl(-40.0, 100.0, 50.0).to_rgb(),
            Hsla::hsl(320.0, 100.0, 50.0).to_rgb()
        ));
        assert!(approx(
            Hsla::hsl(400.0, 100.0, 50.0).to_rgb(),
            Hsla::hsl(40.0, 100.0, 50.0).to_rgb()
        ));
    }

    #[test]
    fn test_premultiplied_scales_by_alpha() {
        let c = Hsla::hsla(0.0, 100.0, 50.0, 0.5).to_premultiplied();
        assert!((c.r - 0.5).abs() < 1e-9);
        assert_eq!(c.a, 0.5);
        assert_eq!(Hsla::hsl(0.0, 100.0, 50.0).opacity(), 1.0);
    }
}
