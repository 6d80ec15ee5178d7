// Drone limits
// Absolute cap on the throttle tilt correction, independent of the
// configured correction value. Keeps a near-vertical attitude from
// commanding a runaway throttle boost.
pub const MAX_THROTTLE_TILT_CORRECTION: f32 = 1000.0_f32;
