// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;

/// Error returned when degrees can't be turned into a [Coord].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("latitude out of range: {0} (expected -90..=90)")]
    LatitudeOutOfRange(f64),

    #[error("coordinate is not finite: lat={lat} lon={lon}")]
    NotFinite { lat: f64, lon: f64 },
}

/// A latitude/longitude pair, in degrees, positive north and east.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Validates the pair and wraps the longitude into `[-180, 180)`.
    ///
    /// Latitudes outside of `[-90, 90]` and non-finite values are rejected.
    /// Longitudes already within `[-180, 180]` are returned unchanged (so both
    /// -180 and 180 are preserved); anything else is wrapped around the globe.
    pub fn normalized(self) -> Result<Self, Error> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(Error::NotFinite {
                lat: self.lat,
                lon: self.lon,
            });
        }

        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::LatitudeOutOfRange(self.lat));
        }

        Ok(Self {
            lat: self.lat,
            lon: wrap_longitude(self.lon),
        })
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.7}, {:.7}]", self.lat, self.lon)
    }
}

fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        return lon;
    }

    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    log::debug!("longitude {} wrapped to {}", lon, wrapped);
    wrapped
}

/// A point on the unit sphere, in earth-centered cartesian coordinates.
/// The z axis goes through the north pole, the x axis through (0°, 0°).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Converts a (not necessarily normalized) [LatLng] to a point on the unit sphere.
    fn from_lat_lng(ll: LatLng) -> Self {
        let phi = ll.lat.to_radians();
        let lambda = ll.lon.to_radians();
        let cos_phi = phi.cos();

        Self {
            x: cos_phi * lambda.cos(),
            y: cos_phi * lambda.sin(),
            z: phi.sin(),
        }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the angle between two vectors, in radians, in `[0, π]`.
    ///
    /// Uses `atan2(|a × b|, a · b)`, which (unlike `acos` of the dot product)
    /// stays accurate for nearly identical and nearly antipodal points.
    pub fn angle(&self, other: &Self) -> f64 {
        self.cross(other).norm().atan2(self.dot(other))
    }
}

/// Validates and normalizes a [LatLng], and converts it to a point on the unit sphere.
pub fn normalize(ll: LatLng) -> Result<Point, Error> {
    ll.normalized().map(Point::from_lat_lng)
}

/// A position on the surface of a sphere.
///
/// Holds both the normalized latitude/longitude and the matching [Point]
/// on the unit sphere. Coords can only be built through [Coord::new] or
/// `TryFrom<LatLng>`, so the two representations always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Coord {
    lat_lng: LatLng,
    point: Point,
}

impl Coord {
    /// Creates a Coord from latitude and longitude in degrees.
    /// See [LatLng::normalized] for accepted values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, Error> {
        Self::try_from(LatLng::new(lat, lon))
    }

    pub fn lat(&self) -> f64 {
        self.lat_lng.lat
    }

    pub fn lon(&self) -> f64 {
        self.lat_lng.lon
    }

    pub fn lat_lng(&self) -> LatLng {
        self.lat_lng
    }

    pub fn point(&self) -> Point {
        self.point
    }

    /// Returns the diametrically opposite position on the sphere.
    pub fn antipode(&self) -> Self {
        let lat_lng = LatLng {
            lat: -self.lat_lng.lat,
            lon: wrap_longitude(self.lat_lng.lon + 180.0),
        };
        Self {
            lat_lng,
            point: Point::from_lat_lng(lat_lng),
        }
    }
}

impl TryFrom<LatLng> for Coord {
    type Error = Error;

    fn try_from(ll: LatLng) -> Result<Self, Self::Error> {
        let lat_lng = ll.normalized()?;
        Ok(Self {
            lat_lng,
            point: Point::from_lat_lng(lat_lng),
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.lat_lng, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr) => {
            assert!(
                (($a - $b).abs() < 1e-12),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    #[test]
    fn test_normalized_keeps_in_range_values() {
        let ll = LatLng::new(29.13, -80.97).normalized().unwrap();
        assert_eq!(ll, LatLng::new(29.13, -80.97));

        assert_eq!(LatLng::new(0.0, 180.0).normalized().unwrap().lon, 180.0);
        assert_eq!(LatLng::new(0.0, -180.0).normalized().unwrap().lon, -180.0);
        assert_eq!(LatLng::new(90.0, 0.0).normalized().unwrap().lat, 90.0);
        assert_eq!(LatLng::new(-90.0, 0.0).normalized().unwrap().lat, -90.0);
    }

    #[test]
    fn test_normalized_wraps_longitude() {
        assert_almost_eq!(LatLng::new(0.0, 190.0).normalized().unwrap().lon, -170.0);
        assert_almost_eq!(LatLng::new(0.0, -190.0).normalized().unwrap().lon, 170.0);
        assert_almost_eq!(LatLng::new(0.0, 540.0).normalized().unwrap().lon, -180.0);
        assert_almost_eq!(LatLng::new(0.0, 725.5).normalized().unwrap().lon, 5.5);
    }

    #[test]
    fn test_normalized_rejects_invalid() {
        assert_eq!(
            LatLng::new(90.0001, 0.0).normalized(),
            Err(Error::LatitudeOutOfRange(90.0001)),
        );
        assert_eq!(
            LatLng::new(-91.0, 0.0).normalized(),
            Err(Error::LatitudeOutOfRange(-91.0)),
        );
        assert!(matches!(
            LatLng::new(f64::NAN, 0.0).normalized(),
            Err(Error::NotFinite { .. })
        ));
        assert!(matches!(
            LatLng::new(0.0, f64::INFINITY).normalized(),
            Err(Error::NotFinite { .. })
        ));
        assert!(Coord::new(100.0, 0.0).is_err());
    }

    #[test]
    fn test_normalize_unit_length() {
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(30) {
                let p = normalize(LatLng::new(lat as f64, lon as f64)).unwrap();
                assert_almost_eq!(p.norm(), 1.0);
            }
        }
    }

    #[test]
    fn test_normalize_axes() {
        let p = normalize(LatLng::new(0.0, 0.0)).unwrap();
        assert_almost_eq!(p.x, 1.0);
        assert_almost_eq!(p.y, 0.0);
        assert_almost_eq!(p.z, 0.0);

        let p = normalize(LatLng::new(0.0, 90.0)).unwrap();
        assert_almost_eq!(p.x, 0.0);
        assert_almost_eq!(p.y, 1.0);
        assert_almost_eq!(p.z, 0.0);

        let p = normalize(LatLng::new(90.0, 0.0)).unwrap();
        assert_almost_eq!(p.x, 0.0);
        assert_almost_eq!(p.y, 0.0);
        assert_almost_eq!(p.z, 1.0);
    }

    #[test]
    fn test_pole_ignores_longitude() {
        let a = Coord::new(90.0, 0.0).unwrap().point();
        let b = Coord::new(90.0, 123.4).unwrap().point();
        let c = Coord::new(90.0, -180.0).unwrap().point();
        assert_almost_eq!(a.angle(&b), 0.0);
        assert_almost_eq!(a.angle(&c), 0.0);
    }

    #[test]
    fn test_coord_matches_lat_lng() {
        let c = Coord::new(-22.55, 190.0).unwrap();
        assert_eq!(c.lat(), -22.55);
        assert_almost_eq!(c.lon(), -170.0);
        assert_eq!(c.point(), normalize(c.lat_lng()).unwrap());
    }

    #[test]
    fn test_antipode() {
        let bermuda = Coord::new(32.30, -64.77).unwrap();
        let a = bermuda.antipode();
        assert_almost_eq!(a.lat(), -32.30);
        assert_almost_eq!(a.lon(), 115.23);

        let east = Coord::new(10.0, 170.0).unwrap().antipode();
        assert_almost_eq!(east.lon(), -10.0);

        let p = bermuda.point();
        let q = a.point();
        assert_almost_eq!(p.x, -q.x);
        assert_almost_eq!(p.y, -q.y);
        assert_almost_eq!(p.z, -q.z);
    }

    #[test]
    fn test_display() {
        let c = Coord::new(29.13, -80.97).unwrap();
        assert_eq!(c.to_string(), "[29.1300000, -80.9700000]");
        assert_eq!(
            LatLng::new(45.71, -122.43).to_string(),
            "[45.7100000, -122.4300000]"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::LatitudeOutOfRange(95.0).to_string(),
            "latitude out of range: 95 (expected -90..=90)"
        );
    }
}
