//! Unit tests for chase-core primitives.

#[cfg(test)]
mod geo {
    use crate::Position;

    #[test]
    fn distance_three_four_five() {
        let a = Position::ORIGIN;
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_sq(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn zero_distance() {
        let p = Position::new(-2.5, 7.25);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn vector_arithmetic() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(0.5, -1.0);
        assert_eq!(a + b, Position::new(1.5, 1.0));
        assert_eq!(a - b, Position::new(0.5, 3.0));
    }

    #[test]
    fn display_three_decimals() {
        assert_eq!(Position::new(1.0, -0.12345).to_string(), "(1.000, -0.123)");
    }
}

#[cfg(test)]
mod ids {
    use crate::PreyId;

    #[test]
    fn index_matches_inner() {
        assert_eq!(PreyId(7).index(), 7);
    }

    #[test]
    fn display() {
        assert_eq!(PreyId(3).to_string(), "3");
    }
}

#[cfg(test)]
mod config {
    use crate::{ChaseConfig, ChaseError};

    #[test]
    fn default_is_valid() {
        ChaseConfig::default().validate().unwrap();
    }

    #[test]
    fn non_positive_steps_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = ChaseConfig { prey_step: bad, ..ChaseConfig::default() };
            assert!(matches!(cfg.validate(), Err(ChaseError::InvalidConfiguration(_))));

            let cfg = ChaseConfig { predator_step: bad, ..ChaseConfig::default() };
            assert!(matches!(cfg.validate(), Err(ChaseError::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn zero_counts_rejected() {
        let cfg = ChaseConfig { round_limit: 0, ..ChaseConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = ChaseConfig { prey_count: 0, ..ChaseConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_spawn_limit_rejected() {
        let cfg = ChaseConfig { spawn_limit: 0.0, ..ChaseConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_inclusive_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(-10.0f64..=10.0);
            assert!((-10.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9u8]), Some(&9));
    }
}
