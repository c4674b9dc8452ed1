//! Sparks thrown out by a detonation.

use crate::color::Hsla;
use crate::geometry::{Point, random};
use crate::surface::Surface;
use crate::trail::Trail;

pub const PARTICLE_TRAIL: usize = 5;
pub const FRICTION: f64 = 0.95;
pub const GRAVITY: f64 = 1.0;

/// Result of one [`Particle::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    Glowing,
    /// Alpha reached the decay floor; the caller drops the spark.
    Expired,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub(crate) position: Point,
    pub(crate) trail: Trail<PARTICLE_TRAIL>,
    pub(crate) angle: f64,
    pub(crate) speed: f64,
    pub(crate) hue: f64,
    pub(crate) brightness: f64,
    pub(crate) alpha: f64,
    pub(crate) decay: f64,
}

impl Particle {
    /// A spark at `origin`, its hue fixed within ±50° of `frame_hue`.
    pub fn new(origin: Point, frame_hue: f64, rng: &mut fastrand::Rng) -> Self {
        Self {
            position: origin,
            trail: Trail::new(origin),
            angle: random(rng, 0.0, std::f64::consts::TAU),
            speed: random(rng, 1.0, 10.0),
            hue: random(rng, frame_hue - 50.0, frame_hue + 50.0),
            brightness: random(rng, 50.0, 80.0),
            alpha: 1.0,
            decay: random(rng, 0.015, 0.03),
        }
    }

    pub fn advance(&mut self) -> Fade {
        self.trail.record(self.position);
        self.speed *= FRICTION;
        self.position.x += self.angle.cos() * self.speed;
        self.position.y += self.angle.sin() * self.speed + GRAVITY;
        self.alpha -= self.decay;

        if self.alpha <= self.decay {
            Fade::Expired
        } else {
            Fade::Glowing
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.stroke_line(
            self.trail.oldest(),
            self.position,
            Hsla::hsla(self.hue, 100.0, self.brightness, self.alpha),
        );
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn trail(&self) -> &Trail<PARTICLE_TRAIL> {
        &self.trail
    }
}
