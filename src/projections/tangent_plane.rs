//! Projection between spherical coordinates and a local plane anchored at a
//! reference point (the "center").
//!
//! `x` grows eastwards and `y` northwards, both in meters. Longitude offsets
//! are always scaled by the parallel through the center, not through the
//! projected point, which keeps the two directions exact inverses of each
//! other. The approximation degrades with distance from the center and is not
//! meaningful when the center sits on a pole, where longitudes come out huge or
//! non-finite.

use crate::{
    distance::{d_latitude_for_distance, d_longitude_for_distance, distance_for_d_latitude, distance_for_d_longitude},
    latlng::GeoPoint,
    point::PlanarPoint,
};

/// Projects `latlng` onto the plane whose origin is `center`.
///
/// Returns exactly [`PlanarPoint::ORIGIN`] when both points have the same
/// latitude and longitude.
///
/// # Usage
///
/// ```
/// use geoplane::{lat_lng_to_cartesian, GeoPoint, PlanarPoint};
///
/// let center = GeoPoint::new(25.0, 25.0);
/// let point = lat_lng_to_cartesian(&GeoPoint::new(35.0, 15.0), &center);
///
/// assert!((point.x - -1.009e6).abs() / 1.009e6 < 0.01);
/// assert!((point.y - 1.106e6).abs() / 1.106e6 < 0.01);
/// assert_eq!(lat_lng_to_cartesian(&center, &center), PlanarPoint::ORIGIN);
/// ```
pub fn lat_lng_to_cartesian(latlng: &GeoPoint, center: &GeoPoint) -> PlanarPoint {
    if latlng == center {
        return PlanarPoint::ORIGIN;
    }

    let d_latitude = latlng.latitude - center.latitude;
    let d_longitude = latlng.longitude - center.longitude;

    PlanarPoint {
        x: distance_for_d_longitude(d_longitude, center.latitude),
        y: distance_for_d_latitude(d_latitude),
    }
}

/// Converts `point`, expressed on the plane whose origin is `center`, back to
/// spherical coordinates.
///
/// The origin maps to `center` unchanged.
///
/// # Usage
///
/// ```
/// use geoplane::{cartesian_to_lat_lng, GeoPoint, PlanarPoint};
///
/// let center = GeoPoint::new(25.0, 25.0);
/// let latlng = cartesian_to_lat_lng(&PlanarPoint::new(-1.009e6, 1.106e6), &center);
///
/// assert!((latlng.latitude - 35.0).abs() / 35.0 < 0.01);
/// assert!((latlng.longitude - 15.0).abs() / 15.0 < 0.01);
/// assert_eq!(cartesian_to_lat_lng(&PlanarPoint::ORIGIN, &center), center);
/// ```
#[allow(clippy::float_cmp)]
pub fn cartesian_to_lat_lng(point: &PlanarPoint, center: &GeoPoint) -> GeoPoint {
    if point.x == 0. && point.y == 0. {
        return *center;
    }

    let d_latitude = d_latitude_for_distance(point.y);
    let d_longitude = d_longitude_for_distance(point.x, center.latitude);

    GeoPoint {
        latitude: center.latitude + d_latitude,
        longitude: center.longitude + d_longitude,
    }
}
