use std::f64::consts::PI;

use crate::constants::HALF_TURN;

/// Converts an angle in degrees to radians. No range checking is done, so
/// negative and out-of-range angles are converted as-is.
///
/// # Usage
///
/// ```
/// use geoplane::degrees_to_radians;
///
/// assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(degrees_to_radians(0.0), 0.0);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / HALF_TURN
}

/// Converts an angle in radians to degrees. Inverse of [`degrees_to_radians`].
///
/// # Usage
///
/// ```
/// use geoplane::radians_to_degrees;
///
/// assert!((radians_to_degrees(std::f64::consts::PI) - 180.0).abs() < 1e-12);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * HALF_TURN / PI
}

/// Square of the sine, used by the haversine terms
#[inline]
pub(crate) fn sin_squared(angle: f64) -> f64 {
    let s = angle.sin();
    s * s
}
