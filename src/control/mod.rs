pub mod heading;
pub mod throttle;
