//! Attitude-derived navigation math for the flight computer: compass
//! heading from a horizontal reference vector, and the throttle boost
//! that compensates tilt-induced lift loss. Both are stateless and run
//! once per control-loop tick; the attitude update routine owns every
//! input and applies every output.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod util;
