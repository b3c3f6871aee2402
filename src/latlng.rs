use std::{fmt::Display, str::FromStr};

use crate::{
    constants::{HALF_TURN, QUARTER_TURN},
    metrics::spherical_distance,
    point::PlanarPoint,
    projections::tangent_plane::{cartesian_to_lat_lng, lat_lng_to_cartesian},
    split_pair, Error, ParseCoord,
};

/// A point on the Earth given by a latitude and longitude in degrees.
///
/// The fields are public and nothing in this crate validates or normalizes
/// them. Use [`GeoPoint::create`] when the values come from an untrusted source.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lng", alias = "lon"))]
    pub longitude: f64,
}

impl GeoPoint {
    /// Constructor that doesn't check the bounds of lat/lng
    pub const fn new(latitude: f64, longitude: f64) -> GeoPoint {
        Self {
            latitude,
            longitude,
        }
    }

    /// Tries to create a lat/lng point, first checking that the values are valid:
    /// * Latitude must be in range [-90, 90]
    /// * Longitude must be in range [-180, 180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoplane::GeoPoint;
    ///
    /// let coord = GeoPoint::create(40.748333, -73.985278);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 40.748333);
    /// assert_eq!(coord.longitude(), -73.985278);
    ///
    /// assert!(GeoPoint::create(100.0, 0.0).is_err());
    /// assert!(GeoPoint::create(0.0, -200.0).is_err());
    /// assert!(GeoPoint::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(latitude: f64, longitude: f64) -> Result<GeoPoint, Error> {
        // NaN fails both range checks
        if !(-QUARTER_TURN..=QUARTER_TURN).contains(&latitude) {
            Err(Error::InvalidCoord(format!("Latitude {latitude} outside of valid range [-90, 90].")))
        } else if !(-HALF_TURN..=HALF_TURN).contains(&longitude) {
            Err(Error::InvalidCoord(format!("Longitude {longitude} outside of valid range [-180, 180].")))
        } else {
            Ok(GeoPoint::new(latitude, longitude))
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    ///
    /// # Example
    ///
    /// ```
    /// use geoplane::GeoPoint;
    ///
    /// assert!(GeoPoint::new(40.748333, -73.985278).is_north());
    /// assert!(!GeoPoint::new(-40.748333, -73.985278).is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Great circle distance in meters to `other`. See [`spherical_distance`].
    pub fn spherical_distance(&self, other: &GeoPoint) -> f64 {
        spherical_distance(self, other)
    }

    /// Projects this point onto the local plane centered at `center`.
    /// See [`lat_lng_to_cartesian`].
    ///
    /// # Usage
    ///
    /// ```
    /// use geoplane::{GeoPoint, PlanarPoint};
    ///
    /// let center = GeoPoint::new(51.5, -0.12);
    /// assert_eq!(center.to_planar(&center), PlanarPoint::ORIGIN);
    /// ```
    pub fn to_planar(&self, center: &GeoPoint) -> PlanarPoint {
        lat_lng_to_cartesian(self, center)
    }

    /// Converts a planar point relative to `center` to lat/lng.
    /// See [`cartesian_to_lat_lng`].
    pub fn from_planar(point: &PlanarPoint, center: &GeoPoint) -> GeoPoint {
        cartesian_to_lat_lng(point, center)
    }
}

impl ParseCoord for GeoPoint {
    /// Parses `"<lat> <lng>"` or `"<lat>,<lng>"` and validates the range
    /// with [`GeoPoint::create`].
    fn parse_coord(value: &str) -> Result<GeoPoint, Error> {
        let (latitude, longitude) = split_pair(value)?;
        GeoPoint::create(latitude, longitude)
    }
}

impl FromStr for GeoPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoPoint::parse_coord(s)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lng = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lng}",
        )
    }
}
