//! Fixed-length position history shared by shells and sparks.

use crate::geometry::Point;

/// Ring buffer holding the last `N` positions of an entity.
///
/// The buffer is always full: it starts as `N` copies of the spawn point and
/// every [`Trail::record`] evicts the oldest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail<const N: usize> {
    points: [Point; N],
    // Index of the newest entry
    head: usize,
}

impl<const N: usize> Trail<N> {
    pub fn new(origin: Point) -> Self {
        assert!(N > 0, "trail must hold at least one point");
        Self {
            points: [origin; N],
            head: 0,
        }
    }

    /// Push `point` as the newest entry, dropping the oldest.
    pub fn record(&mut self, point: Point) {
        self.head = (self.head + 1) % N;
        self.points[self.head] = point;
    }

    pub fn oldest(&self) -> Point {
        self.points[(self.head + 1) % N]
    }

    pub fn newest(&self) -> Point {
        self.points[self.head]
    }

    /// Positions from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        (0..N).map(move |i| self.points[(self.head + N - i) % N])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trail_is_all_origin() {
        let trail = Trail::<3>::new(Point::new(1.0, 2.0));
        assert_eq!(trail.iter().count(), 3);
        assert!(trail.iter().all(|p| p == Point::new(1.0, 2.0)));
        assert_eq!(trail.oldest(), trail.newest());
    }

    #[test]
    fn test_record_evicts_oldest() {
        let mut trail = Trail::<3>::new(Point::new(0.0, 0.0));
        trail.record(Point::new(1.0, 0.0));
        trail.record(Point::new(2.0, 0.0));
        assert_eq!(trail.oldest(), Point::new(0.0, 0.0));

        trail.record(Point::new(3.0, 0.0));
        assert_eq!(trail.oldest(), Point::new(1.0, 0.0));
        assert_eq!(trail.newest(), Point::new(3.0, 0.0));

        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_single_slot_trail() {
        let mut trail = Trail::<1>::new(Point::new(0.0, 0.0));
        trail.record(Point::new(5.0, 5.0));
        assert_eq!(trail.oldest(), Point::new(5.0, 5.0));
        assert_eq!(trail.iter().count(), 1);
    }
}
