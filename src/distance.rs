//! Conversions between a distance along the surface of the Earth and the
//! corresponding change in latitude or longitude.
//!
//! Meridians are great circles, so latitude changes map to distance the same
//! way everywhere. Parallels shrink towards the poles by `cos(latitude)`, so
//! longitude conversions need the latitude of the parallel being travelled.
//!
//! At a latitude of `±90` a parallel has zero radius, so longitude conversions
//! there are not meaningful. `cos(90°)` rounds to about `6e-17` rather than `0`:
//! [`distance_for_d_longitude`] returns a tiny non-zero distance and
//! [`d_longitude_for_distance`] returns a huge (or non-finite) longitude change.
//! This is a limit of the model and is not guarded against.

use crate::{constants::EARTH_RADIUS, utility::{degrees_to_radians, radians_to_degrees}};

/// Radius in meters of the parallel at `latitude`
fn parallel_radius(latitude: f64) -> f64 {
    EARTH_RADIUS * degrees_to_radians(latitude).cos()
}

/// Returns the change in latitude, in degrees, which corresponds to travelling
/// `distance` meters along a fixed longitude.
///
/// # Usage
///
/// ```
/// use geoplane::d_latitude_for_distance;
///
/// assert_eq!(d_latitude_for_distance(0.0), 0.0);
/// assert!((d_latitude_for_distance(1.106e6) - 10.0).abs() < 0.1);
/// ```
pub fn d_latitude_for_distance(distance: f64) -> f64 {
    radians_to_degrees(distance / EARTH_RADIUS)
}

/// Returns the distance in meters travelled along a fixed longitude for a
/// change in latitude of `d_latitude` degrees.
///
/// # Usage
///
/// ```
/// use geoplane::distance_for_d_latitude;
///
/// assert!((distance_for_d_latitude(10.0) - 1.106e6).abs() / 1.106e6 < 0.01);
/// ```
pub fn distance_for_d_latitude(d_latitude: f64) -> f64 {
    EARTH_RADIUS * degrees_to_radians(d_latitude)
}

/// Returns the change in longitude, in degrees, which corresponds to travelling
/// `distance` meters along the parallel at `latitude`.
///
/// Not meaningful when `latitude` is `±90`: the result is huge or non-finite.
///
/// # Usage
///
/// ```
/// use geoplane::d_longitude_for_distance;
///
/// assert_eq!(d_longitude_for_distance(0.0, 10.0), 0.0);
/// assert!((d_longitude_for_distance(1.009e6, 25.0) - 10.0).abs() < 0.1);
/// ```
pub fn d_longitude_for_distance(distance: f64, latitude: f64) -> f64 {
    radians_to_degrees(distance / parallel_radius(latitude))
}

/// Returns the distance in meters travelled along the parallel at `latitude`
/// for a change in longitude of `d_longitude` degrees.
///
/// # Usage
///
/// ```
/// use geoplane::distance_for_d_longitude;
///
/// assert_eq!(distance_for_d_longitude(0.0, 25.0), 0.0);
/// assert!((distance_for_d_longitude(10.0, 25.0) - 1.009e6).abs() / 1.009e6 < 0.01);
/// ```
pub fn distance_for_d_longitude(d_longitude: f64, latitude: f64) -> f64 {
    parallel_radius(latitude) * degrees_to_radians(d_longitude)
}
