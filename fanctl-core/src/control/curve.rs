//! Temperature to fan level curve
//!
//! Piecewise-linear mapping with asymmetric clamps:
//!
//! ```text
//! level
//!   1 |                    +-------
//!     |                 .-'
//!  hi |              .-'
//!     |           .-'
//!  lo |        +-'
//!   0 |--------+
//!     +--------+-----------+-------- temp
//!           temp_min    temp_max
//! ```
//!
//! At or below `temp_min` the fan is fully off, not at `level_low`, so the
//! output steps from 0 straight to `level_low` once the temperature passes
//! `temp_min`. At or above `temp_max` the fan is at full speed, not at
//! `level_high`.

use crate::config::FanConfig;

/// Map a temperature reading to an actuation level in [0, 1]
///
/// Any finite `temp` is accepted; readings outside the configured range
/// saturate. Pure and deterministic.
pub fn compute_level(temp: f32, cfg: &FanConfig) -> f32 {
    let raw = temp - cfg.temp_min();
    if raw <= 0.0 {
        return 0.0;
    }
    if temp >= cfg.temp_max() {
        return 1.0;
    }

    // delta_t > 0 by config validation
    let delta_t = cfg.temp_max() - cfg.temp_min();
    let delta_v = cfg.level_high() - cfg.level_low();
    let step = delta_v / delta_t;

    let candidate = cfg.level_low() + raw * step;
    if candidate > 1.0 {
        1.0
    } else if candidate < 0.0 {
        // Only reachable with level_low > level_high
        0.0
    } else {
        candidate
    }
}
