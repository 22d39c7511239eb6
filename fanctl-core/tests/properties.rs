//! Property tests for the fan curve and hysteresis controller

use fanctl_core::config::{ConfigError, FanConfig};
use fanctl_core::control::{compute_level, FanState, HysteresisController};
use proptest::prelude::*;

/// Valid configs with `level_low <= level_high`
fn ordered_config() -> impl Strategy<Value = FanConfig> {
    (-20.0f32..90.0, 0.5f32..40.0, 0.0f32..=1.0, 0.0f32..=1.0).prop_map(
        |(temp_min, span, a, b)| {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            FanConfig::new(temp_min, temp_min + span, low, high).unwrap()
        },
    )
}

/// Valid configs with levels in any order
fn any_config() -> impl Strategy<Value = FanConfig> {
    (-20.0f32..90.0, 0.5f32..40.0, 0.0f32..=1.0, 0.0f32..=1.0).prop_map(
        |(temp_min, span, low, high)| FanConfig::new(temp_min, temp_min + span, low, high).unwrap(),
    )
}

proptest! {
    #[test]
    fn level_is_zero_at_or_below_min(cfg in ordered_config(), below in 0.0f32..100.0) {
        prop_assert_eq!(compute_level(cfg.temp_min() - below, &cfg), 0.0);
    }

    #[test]
    fn level_is_one_at_or_above_max(cfg in ordered_config(), above in 0.0f32..100.0) {
        prop_assert_eq!(compute_level(cfg.temp_max() + above, &cfg), 1.0);
    }

    #[test]
    fn level_is_within_unit_range(cfg in any_config(), temp in -200.0f32..300.0) {
        let level = compute_level(temp, &cfg);
        prop_assert!((0.0..=1.0).contains(&level));
    }

    #[test]
    fn level_is_monotonic_within_range(
        cfg in ordered_config(),
        a in 0.0f32..=1.0,
        b in 0.0f32..=1.0,
    ) {
        let span = cfg.temp_max() - cfg.temp_min();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let t_lo = cfg.temp_min() + lo * span;
        let t_hi = cfg.temp_min() + hi * span;
        prop_assert!(compute_level(t_lo, &cfg) <= compute_level(t_hi, &cfg));
    }

    #[test]
    fn threshold_never_activates(cfg in ordered_config(), ticks in 1usize..50) {
        let mut controller = HysteresisController::new(cfg);
        let threshold = controller.threshold();
        for _ in 0..ticks {
            prop_assert_eq!(controller.tick(threshold), 0.0);
            prop_assert_eq!(controller.state(), FanState::Idle);
        }
    }

    #[test]
    fn below_min_always_forces_idle(
        cfg in any_config(),
        warmup in proptest::collection::vec(-50.0f32..150.0, 0..20),
        below in 0.01f32..50.0,
    ) {
        let mut controller = HysteresisController::new(cfg);
        for temp in warmup {
            controller.tick(temp);
        }
        prop_assert_eq!(controller.tick(cfg.temp_min() - below), 0.0);
        prop_assert_eq!(controller.state(), FanState::Idle);
    }

    #[test]
    fn tick_level_is_within_unit_range(
        cfg in any_config(),
        temps in proptest::collection::vec(-50.0f32..150.0, 1..50),
    ) {
        let mut controller = HysteresisController::new(cfg);
        for temp in temps {
            let level = controller.tick(temp);
            prop_assert!((0.0..=1.0).contains(&level));
            if controller.state() == FanState::Idle {
                prop_assert_eq!(level, 0.0);
            }
        }
    }

    #[test]
    fn reversed_range_is_rejected(temp_max in -20.0f32..90.0, gap in 0.0f32..40.0) {
        let result = FanConfig::new(temp_max + gap, temp_max, 0.4, 0.6);
        prop_assert_eq!(result, Err(ConfigError::InvalidTemperatureRange));
    }
}

#[test]
fn active_fan_near_min_runs_at_level_low() {
    let cfg = FanConfig::new(40.0, 50.0, 0.4, 0.6).unwrap();
    let mut controller = HysteresisController::new(cfg);
    controller.tick(47.0);

    let level = controller.tick(40.01);
    assert_eq!(controller.state(), FanState::Active);
    assert!(level > 0.0);
    assert!((level - 0.4).abs() < 0.01);

    assert_eq!(controller.tick(39.99), 0.0);
    assert_eq!(controller.state(), FanState::Idle);
}
