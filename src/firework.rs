//! Shells travelling from the launch point to their target.

use crate::color::Hsla;
use crate::geometry::{Point, distance, random};
use crate::surface::Surface;
use crate::trail::Trail;

pub const FIREWORK_TRAIL: usize = 3;
pub const LAUNCH_SPEED: f64 = 2.0;
pub const ACCELERATION: f64 = 1.05;

const RETICLE_MIN: f64 = 1.0;
const RETICLE_MAX: f64 = 8.0;
const RETICLE_STEP: f64 = 0.3;

/// Result of one [`Firework::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flight {
    Travelling,
    /// The shell reached its target; the caller bursts it and drops it.
    Arrived,
}

#[derive(Debug, Clone)]
pub struct Firework {
    position: Point,
    start: Point,
    target: Point,
    distance_to_target: f64,
    distance_traveled: f64,
    trail: Trail<FIREWORK_TRAIL>,
    angle: f64,
    speed: f64,
    brightness: f64,
    target_radius: f64,
}

impl Firework {
    pub fn new(start: Point, target: Point, rng: &mut fastrand::Rng) -> Self {
        Self {
            position: start,
            start,
            target,
            distance_to_target: distance(start, target),
            distance_traveled: 0.0,
            trail: Trail::new(start),
            angle: (target.y - start.y).atan2(target.x - start.x),
            speed: LAUNCH_SPEED,
            brightness: random(rng, 50.0, 70.0),
            target_radius: RETICLE_MIN,
        }
    }

    /// Move one frame along the launch angle, accelerating.
    ///
    /// Arrival is decided on the position the shell *would* reach, so a shell
    /// never overshoots its target. A zero-length flight arrives on the
    /// first call.
    pub fn advance(&mut self) -> Flight {
        self.trail.record(self.position);

        if self.target_radius < RETICLE_MAX {
            self.target_radius += RETICLE_STEP;
        } else {
            self.target_radius = RETICLE_MIN;
        }

        self.speed *= ACCELERATION;

        let vx = self.angle.cos() * self.speed;
        let vy = self.angle.sin() * self.speed;
        let next = Point::new(self.position.x + vx, self.position.y + vy);
        self.distance_traveled = distance(self.start, next);

        if self.distance_traveled >= self.distance_to_target {
            Flight::Arrived
        } else {
            self.position = next;
            Flight::Travelling
        }
    }

    /// Stroke the trail segment in the frame hue, plus the pulsing reticle
    /// around the target.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, hue: f64) {
        let color = Hsla::hsl(hue, 100.0, self.brightness);
        surface.stroke_line(self.trail.oldest(), self.position, color);
        surface.stroke_circle(self.target, self.target_radius, color);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn distance_to_target(&self) -> f64 {
        self.distance_to_target
    }

    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn target_radius(&self) -> f64 {
        self.target_radius
    }

    pub fn trail(&self) -> &Trail<FIREWORK_TRAIL> {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(start: Point, target: Point) -> Firework {
        Firework::new(start, target, &mut fastrand::Rng::with_seed(3))
    }

    #[test]
    fn test_new_shell() {
        let fw = shell(Point::new(0.0, 100.0), Point::new(0.0, 0.0));
        assert_eq!(fw.distance_to_target(), 100.0);
        assert_eq!(fw.distance_traveled(), 0.0);
        assert_eq!(fw.speed(), LAUNCH_SPEED);
        assert_eq!(fw.target_radius(), 1.0);
        assert!((fw.angle() + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((50.0..70.0).contains(&fw.brightness()));
        assert!(fw.trail().iter().all(|p| p == fw.start()));
    }

    #[test]
    fn test_advance_moves_toward_target() {
        let mut fw = shell(Point::new(0.0, 100.0), Point::new(0.0, 0.0));
        assert_eq!(fw.advance(), Flight::Travelling);
        assert!((fw.speed() - 2.1).abs() < 1e-12);
        assert!((fw.position().y - 97.9).abs() < 1e-9);
        assert!(fw.position().x.abs() < 1e-9);
        assert!((fw.distance_traveled() - 2.1).abs() < 1e-9);
        assert_eq!(fw.trail().newest(), Point::new(0.0, 100.0));
    }

    #[test]
    fn test_zero_distance_arrives_immediately() {
        let start = Point::new(400.0, 600.0);
        let mut fw = shell(start, start);
        assert_eq!(fw.advance(), Flight::Arrived);
        assert_eq!(fw.position(), start);
    }

    #[test]
    fn test_arrival_uses_look_ahead() {
        // 2.1 from the first step would overshoot a 2.0 flight
        let mut fw = shell(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
        assert_eq!(fw.advance(), Flight::Arrived);
        assert_eq!(fw.position(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_reticle_pulses_and_wraps() {
        let mut fw = shell(Point::new(0.0, 10_000.0), Point::new(0.0, 0.0));
        let mut radii = Vec::new();
        for _ in 0..30 {
            fw.advance();
            radii.push(fw.target_radius());
        }
        assert!(radii.iter().all(|r| (1.0..8.3).contains(r)));
        // 1.0 + 24 * 0.3 >= 8.0, the next step resets
        let wrap = radii.iter().position(|&r| r == 1.0).unwrap();
        assert_eq!(wrap, 24);
        assert!(radii[wrap - 1] >= 8.0);
    }

    #[test]
    fn test_speed_strictly_increases_until_arrival() {
        let mut fw = shell(Point::new(0.0, 500.0), Point::new(300.0, 0.0));
        let mut last_speed = fw.speed();
        let mut last_traveled = fw.distance_traveled();
        while fw.advance() == Flight::Travelling {
            assert!((fw.speed() - last_speed * ACCELERATION).abs() < 1e-9);
            assert!(fw.distance_traveled() >= last_traveled);
            last_speed = fw.speed();
            last_traveled = fw.distance_traveled();
        }
        assert!(fw.distance_traveled() >= fw.distance_to_target());
    }
}
