//! Points, random sampling and distances.

/// A position on the canvas, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Uniform float in `[min, max)`.
pub fn random(rng: &mut fastrand::Rng, min: f64, max: f64) -> f64 {
    rng.f64() * (max - min) + min
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Point::new(3.0, 4.0), Point::new(0.0, 0.0)), 5.0);
        assert_eq!(distance(Point::new(7.5, -2.0), Point::new(7.5, -2.0)), 0.0);
    }

    #[test]
    fn test_random_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1000 {
            let v = random(&mut rng, -50.0, 50.0);
            assert!((-50.0..50.0).contains(&v));
        }
    }

    #[test]
    fn test_random_degenerate_range() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(random(&mut rng, 2.0, 2.0), 2.0);
    }
}
