//! Conversions between spherical lat/lng coordinates and a local planar
//! approximation, plus distances on a spherical Earth and on the plane.
//!
//! All of the math here is pure: no function validates its input and none of
//! them fail. Inputs that are mathematically undefined for the model, most
//! notably a reference latitude of `±90`, produce results that are not
//! meaningful (huge or non-finite) rather than errors.
//! Checked construction and parsing are available through [`GeoPoint::create`]
//! and [`ParseCoord`].
//!
//! # Usage
//!
//! ```
//! use geoplane::{GeoPoint, PlanarPoint};
//!
//! let center = GeoPoint::new(25.0, 25.0);
//! let point = GeoPoint::new(25.1, 24.9).to_planar(&center);
//!
//! assert!(point.x < 0.0 && point.y > 0.0);
//! assert!((point.to_geo(&center).latitude - 25.1).abs() < 1e-9);
//! ```

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod distance;
pub mod latlng;
pub mod metrics;
pub mod point;
pub mod utility;

pub mod projections {
    pub mod tangent_plane;
}

mod constants;

pub use constants::EARTH_RADIUS;
pub use distance::{d_latitude_for_distance, d_longitude_for_distance, distance_for_d_latitude, distance_for_d_longitude};
pub use latlng::GeoPoint;
pub use metrics::{cartesian_distance, spherical_distance};
pub use point::PlanarPoint;
pub use projections::tangent_plane::{cartesian_to_lat_lng, lat_lng_to_cartesian};
pub use utility::{degrees_to_radians, radians_to_degrees};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Planar point is not valid: {0}")]
    InvalidPoint(String),
    #[error("Could not parse coordinate: {0}")]
    Parse(String),
}

pub trait ParseCoord {
    /// Parses a coordinate from text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the text is not a pair of numbers, or a
    /// validation error specific to the coordinate type.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from text.
///
/// # Errors
///
/// See [`ParseCoord::parse_coord`].
///
/// # Usage
///
/// ```
/// use geoplane::{GeoPoint, PlanarPoint};
///
/// let center: GeoPoint = geoplane::from_str("25, 25").unwrap();
/// let point: PlanarPoint = geoplane::from_str("-1009000 1106000").unwrap();
///
/// assert_eq!(center, GeoPoint::new(25.0, 25.0));
/// assert_eq!(point, PlanarPoint::new(-1.009e6, 1.106e6));
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Splits `"<a> <b>"` / `"<a>,<b>"` into two numbers. With a comma, each
/// side must hold exactly one number.
pub(crate) fn split_pair(value: &str) -> Result<(f64, f64), Error> {
    let fields = if value.contains(',') {
        value.split(',').map(str::trim).collect::<Vec<_>>()
    } else {
        value.split_whitespace().collect::<Vec<_>>()
    };

    let [a, b] = fields.as_slice() else {
        return Err(Error::Parse(format!("Expected two values, got {} in \"{value}\".", fields.len())));
    };

    let parse = |field: &str| {
        if field.is_empty() {
            return Err(Error::Parse(format!("Empty value next to a comma in \"{value}\".")));
        }
        field
            .parse::<f64>()
            .map_err(|e| Error::Parse(format!("\"{field}\" is not a number: {e}")))
    };

    Ok((parse(*a)?, parse(*b)?))
}
