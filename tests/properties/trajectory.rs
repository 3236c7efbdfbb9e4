//! Property tests for the ball drop.

use proptest::prelude::*;

use drills::{height_at, trajectory, Position, GRAVITY, MAX_SECONDS};

proptest! {
    /// PROPERTY: airborne samples report exactly H - g*t^2/2.
    #[test]
    fn property_airborne_height_matches_formula(tower in -100.0f64..10_000.0) {
        for sample in trajectory(tower) {
            let t = f64::from(sample.seconds);
            let expected = tower - GRAVITY * t * t / 2.0;
            match sample.position {
                Position::Airborne(h) => {
                    prop_assert!(h > 0.0);
                    prop_assert!((h - expected).abs() <= 1e-9 * tower.abs().max(1.0));
                }
                Position::Grounded => prop_assert!(expected <= 1e-9 * tower.abs().max(1.0)),
            }
        }
    }

    /// PROPERTY: once grounded, the ball stays grounded, and heights never increase.
    #[test]
    fn property_landed_stays_landed(tower in -100.0f64..10_000.0) {
        let samples: Vec<_> = trajectory(tower).collect();
        prop_assert_eq!(samples.len() as u32, MAX_SECONDS + 1);

        let mut landed = false;
        let mut previous = f64::INFINITY;
        for sample in &samples {
            match sample.position {
                Position::Grounded => landed = true,
                Position::Airborne(h) => {
                    prop_assert!(!landed, "airborne again at t={}", sample.seconds);
                    prop_assert!(h <= previous);
                    previous = h;
                }
            }
        }
    }

    /// PROPERTY: the raw height is monotonically non-increasing in t.
    #[test]
    fn property_height_non_increasing(tower in -1.0e6f64..1.0e6, t in 0u32..MAX_SECONDS) {
        prop_assert!(height_at(tower, f64::from(t + 1)) <= height_at(tower, f64::from(t)));
    }
}
