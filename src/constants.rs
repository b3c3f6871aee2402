/// Mean radius of the Earth in meters. Every distance in this crate is
/// measured on a sphere of this radius.
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Degrees per half turn
pub(crate) const HALF_TURN: f64 = 180.;
/// Degrees per quarter turn
pub(crate) const QUARTER_TURN: f64 = 90.;
