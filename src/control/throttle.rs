use libm::cosf;

use crate::config::constants::MAX_THROTTLE_TILT_CORRECTION;
use crate::util::math::vectors::{RotationAxis, TiltAngles};

/// Throttle boost countering the vertical-thrust loss at the current tilt
/// of the selected axis.
///
/// Tilting by θ scales vertical thrust by cos(θ), so restoring level
/// thrust takes a boost of correction_value × (1/cos(θ) − 1). cos is even,
/// so tilting either direction yields the same non-negative correction.
/// The raw formula diverges near ±π/2; the result is capped at
/// `MAX_THROTTLE_TILT_CORRECTION`, and once cos(θ) is zero or negative
/// (at or past vertical) the cap is returned directly.
pub fn calculate_throttle_tilt_correction(
    correction_value: u16,
    axis: RotationAxis,
    tilt_angles: &TiltAngles,
) -> f32 {
    let cos_tilt = cosf(tilt_angles.angle(axis));
    if cos_tilt <= 0.0 {
        return MAX_THROTTLE_TILT_CORRECTION;
    }

    let correction = correction_value as f32 * (1.0 / cos_tilt - 1.0);
    if correction > MAX_THROTTLE_TILT_CORRECTION {
        MAX_THROTTLE_TILT_CORRECTION
    } else {
        correction
    }
}
