use std::{fmt::Display, str::FromStr};

use crate::{
    latlng::GeoPoint,
    metrics::cartesian_distance,
    projections::tangent_plane::{cartesian_to_lat_lng, lat_lng_to_cartesian},
    split_pair, Error, ParseCoord,
};

/// A point on a local plane, in meters. `x` points east and `y` points north.
///
/// A planar point only has meaning relative to the [`GeoPoint`] chosen as the
/// origin of its plane. That center is never stored and must be passed to
/// every conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    /// The origin of the plane, which is where its center projects to.
    pub const ORIGIN: PlanarPoint = PlanarPoint::new(0., 0.);

    pub const fn new(x: f64, y: f64) -> PlanarPoint {
        Self { x, y }
    }

    /// Euclidean distance to `other`. See [`cartesian_distance`].
    pub fn distance(&self, other: &PlanarPoint) -> f64 {
        cartesian_distance(self, other)
    }

    /// Converts this point back to lat/lng using `center` as the origin.
    /// See [`cartesian_to_lat_lng`].
    ///
    /// # Usage
    ///
    /// ```
    /// use geoplane::{GeoPoint, PlanarPoint};
    ///
    /// let center = GeoPoint::new(25.0, 25.0);
    /// let point = GeoPoint::new(25.5, 24.5).to_planar(&center);
    /// let latlng = point.to_geo(&center);
    ///
    /// assert!((latlng.latitude - 25.5).abs() < 1e-9);
    /// assert!((latlng.longitude - 24.5).abs() < 1e-9);
    /// ```
    pub fn to_geo(&self, center: &GeoPoint) -> GeoPoint {
        cartesian_to_lat_lng(self, center)
    }

    /// Projects `latlng` onto the plane centered at `center`.
    /// See [`lat_lng_to_cartesian`].
    pub fn from_geo(latlng: &GeoPoint, center: &GeoPoint) -> PlanarPoint {
        lat_lng_to_cartesian(latlng, center)
    }
}

impl ParseCoord for PlanarPoint {
    /// Parses `"<x> <y>"` or `"<x>,<y>"`. Both values must be finite.
    fn parse_coord(value: &str) -> Result<PlanarPoint, Error> {
        let (x, y) = split_pair(value)?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(Error::InvalidPoint(format!("Planar coordinates ({x}, {y}) must be finite.")));
        }

        Ok(PlanarPoint::new(x, y))
    }
}

impl FromStr for PlanarPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanarPoint::parse_coord(s)
    }
}

impl Display for PlanarPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let x = buf.format(self.x);
        let mut buf = ryu::Buffer::new();
        let y = buf.format(self.y);
        write!(f, "{x} {y}")
    }
}
