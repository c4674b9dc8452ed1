//! Per-frame driver owning every piece of show state.

use log::trace;

use crate::color::Rgba;
use crate::config::{HueMode, ShowConfig};
use crate::firework::{Firework, Flight};
use crate::geometry::{Point, random};
use crate::particle::{Fade, Particle};
use crate::scheduler::{LaunchScheduler, Launches};
use crate::surface::{BlendMode, Rect, Surface};

/// Last known pointer state, written by input handlers between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub position: Option<Point>,
    pub pressed: bool,
}

pub struct Simulation {
    width: f64,
    height: f64,
    fireworks: Vec<Firework>,
    particles: Vec<Particle>,
    hue: f64,
    hue_mode: HueMode,
    burst_size: usize,
    fade_alpha: f64,
    scheduler: LaunchScheduler,
    pointer: Pointer,
    rng: fastrand::Rng,
    frames: u64,
}

impl Simulation {
    /// A show on a `width × height` surface (canvas units).
    pub fn new(width: f64, height: f64, config: &ShowConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        Self {
            width,
            height,
            fireworks: Vec::new(),
            particles: Vec::new(),
            hue: config.initial_hue,
            hue_mode: config.hue,
            burst_size: config.burst_size,
            fade_alpha: config.fade_alpha,
            scheduler: LaunchScheduler::new(config.auto_launch_ticks, config.pointer_launch_ticks),
            pointer: Pointer::default(),
            rng,
            frames: 0,
        }
    }

    /// Bottom centre of the surface, where every shell starts.
    pub fn launch_point(&self) -> Point {
        Point::new(self.width / 2.0, self.height)
    }

    /// Send a shell from the launch point toward `target`.
    pub fn launch(&mut self, target: Point) {
        let start = self.launch_point();
        trace!("launch ({:.1}, {:.1}) -> ({:.1}, {:.1})", start.x, start.y, target.x, target.y);
        self.fireworks.push(Firework::new(start, target, &mut self.rng));
    }

    /// Append one burst of sparks at `at`, hued around the current frame hue.
    pub fn detonate(&mut self, at: Point) {
        trace!("detonate at ({:.1}, {:.1})", at.x, at.y);
        for _ in 0..self.burst_size {
            self.particles.push(Particle::new(at, self.hue, &mut self.rng));
        }
    }

    /// Run one complete frame: hue, fade, shells, sparks, launches.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.frames += 1;
        self.hue = match self.hue_mode {
            HueMode::Random => random(&mut self.rng, 0.0, 360.0),
            HueMode::Drift { step } => (self.hue + step).rem_euclid(360.0),
        };

        surface.set_blend(BlendMode::DestinationOut);
        surface.fill_rect(
            Rect::new(0.0, 0.0, self.width, self.height),
            Rgba::black(self.fade_alpha),
        );
        surface.set_blend(BlendMode::Lighter);

        // Reverse order keeps the indices of unvisited entries stable
        for i in (0..self.fireworks.len()).rev() {
            self.fireworks[i].render(surface, self.hue);
            if self.fireworks[i].advance() == Flight::Arrived {
                let target = self.fireworks.remove(i).target();
                self.detonate(target);
            }
        }

        for i in (0..self.particles.len()).rev() {
            self.particles[i].render(surface);
            if self.particles[i].advance() == Fade::Expired {
                self.particles.remove(i);
            }
        }

        let Launches { auto, pointer } = self.scheduler.poll(self.pointer.pressed);
        if auto {
            let target = Point::new(
                random(&mut self.rng, 0.0, self.width),
                random(&mut self.rng, 0.0, self.height / 2.0),
            );
            self.launch(target);
        }
        if pointer {
            if let Some(target) = self.pointer.position {
                self.launch(target);
            }
        }
    }

    pub fn pointer_moved(&mut self, at: Point) {
        self.pointer.position = Some(at);
    }

    pub fn pointer_down(&mut self) {
        self.pointer.pressed = true;
    }

    pub fn pointer_up(&mut self) {
        self.pointer.pressed = false;
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn scheduler(&self) -> &LaunchScheduler {
        &self.scheduler
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
