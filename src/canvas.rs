//! In-memory raster implementing [`Surface`].

use crate::color::{Hsla, Rgba};
use crate::geometry::Point;
use crate::surface::{BlendMode, Rect, Surface};

/// Premultiplied RGBA raster. One raster pixel covers `scale × scale`
/// canvas units.
pub struct Canvas {
    width: usize,
    height: usize,
    scale: f64,
    pixels: Vec<Rgba>,
    blend: BlendMode,
    // Reused per stroke so a pixel is composited once per path
    touched: Vec<usize>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            pixels: vec![Rgba::TRANSPARENT; width * height],
            blend: BlendMode::default(),
            touched: Vec::with_capacity(64),
        }
    }

    /// Raster size in pixels.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn blend(&self) -> BlendMode {
        self.blend
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }

    /// Pixel composited over an opaque background colour.
    pub fn shade(&self, x: usize, y: usize, bg: (u8, u8, u8)) -> (u8, u8, u8) {
        let p = self.pixel(x, y);
        let keep = 1.0 - p.a.min(1.0);
        let mix = |bg: u8, c: f64| ((bg as f64 / 255.0 * keep + c).min(1.0) * 255.0).round() as u8;
        (mix(bg.0, p.r), mix(bg.1, p.g), mix(bg.2, p.b))
    }

    fn to_pixel(&self, p: Point) -> (f64, f64) {
        (p.x / self.scale, p.y / self.scale)
    }

    fn touch(&mut self, px: f64, py: f64) {
        if px < 0.0 || py < 0.0 {
            return;
        }
        let (x, y) = (px as usize, py as usize);
        if x < self.width && y < self.height {
            self.touched.push(y * self.width + x);
        }
    }

    fn composite(dst: &mut Rgba, src: Rgba, mode: BlendMode) {
        match mode {
            BlendMode::DestinationOut => {
                let keep = 1.0 - src.a;
                dst.r *= keep;
                dst.g *= keep;
                dst.b *= keep;
                dst.a *= keep;
            }
            BlendMode::Lighter => {
                dst.r = (dst.r + src.r).min(1.0);
                dst.g = (dst.g + src.g).min(1.0);
                dst.b = (dst.b + src.b).min(1.0);
                dst.a = (dst.a + src.a).min(1.0);
            }
        }
    }

    fn flush_touched(&mut self, src: Rgba) {
        self.touched.sort_unstable();
        self.touched.dedup();
        let mode = self.blend;
        for &idx in &self.touched {
            Self::composite(&mut self.pixels[idx], src, mode);
        }
        self.touched.clear();
    }
}

impl Surface for Canvas {
    fn dimensions(&self) -> (f64, f64) {
        (self.width as f64 * self.scale, self.height as f64 * self.scale)
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let x0 = (rect.x / self.scale).floor().max(0.0) as usize;
        let y0 = (rect.y / self.scale).floor().max(0.0) as usize;
        let x1 = (((rect.x + rect.width) / self.scale).ceil().max(0.0) as usize).min(self.width);
        let y1 = (((rect.y + rect.height) / self.scale).ceil().max(0.0) as usize).min(self.height);

        let mode = self.blend;
        for y in y0..y1 {
            for x in x0..x1 {
                Self::composite(&mut self.pixels[y * self.width + x], color, mode);
            }
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Hsla) {
        let (ax, ay) = self.to_pixel(from);
        let (bx, by) = self.to_pixel(to);
        let steps = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0) as usize;

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.touch(ax + (bx - ax) * t, ay + (by - ay) * t);
        }
        self.flush_touched(color.to_premultiplied());
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Hsla) {
        let (cx, cy) = self.to_pixel(center);
        let r = radius / self.scale;
        let steps = ((std::f64::consts::TAU * r * 2.0).ceil() as usize).max(8);

        for i in 0..steps {
            let theta = std::f64::consts::TAU * i as f64 / steps as f64;
            self.touch(cx + r * theta.cos(), cy + r * theta.sin());
        }
        self.flush_touched(color.to_premultiplied());
    }
}
