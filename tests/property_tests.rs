//! Invariants of shells and sparks over arbitrary launches.

use proptest::prelude::*;

use pyrocanvas::firework::{ACCELERATION, FIREWORK_TRAIL, Firework, Flight};
use pyrocanvas::geometry::Point;
use pyrocanvas::particle::{Fade, PARTICLE_TRAIL, Particle};

fn point() -> impl Strategy<Value = Point> {
    (0.0..2000.0f64, 0.0..2000.0f64).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn firework_travel_and_speed_are_monotonic(
        start in point(),
        target in point(),
        seed in any::<u64>(),
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut fw = Firework::new(start, target, &mut rng);
        let mut traveled = fw.distance_traveled();
        let mut speed = fw.speed();

        for _ in 0..500 {
            let flight = fw.advance();
            prop_assert!(fw.distance_traveled() >= traveled);
            prop_assert!(fw.speed() > speed);
            prop_assert!((fw.speed() - speed * ACCELERATION).abs() < 1e-9 * fw.speed());
            prop_assert_eq!(fw.trail().iter().count(), FIREWORK_TRAIL);
            traveled = fw.distance_traveled();
            speed = fw.speed();
            if flight == Flight::Arrived {
                prop_assert!(fw.distance_traveled() >= fw.distance_to_target());
                return Ok(());
            }
            prop_assert!(fw.distance_traveled() < fw.distance_to_target());
        }
        prop_assert!(false, "shell did not arrive within 500 frames");
    }

    #[test]
    fn particle_fades_by_decay_until_floor(
        origin in point(),
        hue in 0.0..360.0f64,
        seed in any::<u64>(),
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut spark = Particle::new(origin, hue, &mut rng);
        let decay = spark.decay();

        loop {
            let before = spark.alpha();
            let fade = spark.advance();
            prop_assert!((before - spark.alpha() - decay).abs() < 1e-12);
            prop_assert_eq!(spark.trail().iter().count(), PARTICLE_TRAIL);
            match fade {
                Fade::Expired => {
                    prop_assert!(spark.alpha() <= decay);
                    prop_assert!(spark.alpha() > 0.0);
                    break;
                }
                Fade::Glowing => prop_assert!(spark.alpha() > decay),
            }
        }
    }
}
