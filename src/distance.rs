// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Coord, Point};

/// Mean radius of Earth, in statute miles.
pub const EARTH_RADIUS_MI: f64 = 3958.8;

/// Mean radius of Earth, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean radius of Earth, in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.1;

/// Unit of length of a distance on Earth.
///
/// Conversions between units are ratios of the corresponding Earth radii,
/// so that converting a distance always agrees with recomputing it in the
/// other unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub enum Unit {
    StatuteMiles = 0,
    Kilometers = 1,
    NauticalMiles = 2,
}

impl Unit {
    /// Returns the radius of Earth expressed in this unit.
    pub const fn earth_radius(self) -> f64 {
        match self {
            Self::StatuteMiles => EARTH_RADIUS_MI,
            Self::Kilometers => EARTH_RADIUS_KM,
            Self::NauticalMiles => EARTH_RADIUS_NM,
        }
    }

    /// Converts a distance expressed in this unit to another unit.
    pub fn convert(self, d: f64, to: Unit) -> f64 {
        d * to.earth_radius() / self.earth_radius()
    }
}

/// Calculates the central angle between two points on the unit sphere, in radians.
pub fn angular_separation(a: Point, b: Point) -> f64 {
    a.angle(&b)
}

/// Calculates the central angle between two coordinates, in radians, in `[0, π]`.
pub fn angle(p: &Coord, q: &Coord) -> f64 {
    angular_separation(p.point(), q.point())
}

/// Calculates the great-circle distance between two coordinates on a sphere
/// with the given radius. The result is in the same unit as the radius.
///
/// Panics if the radius is not a positive, finite number.
pub fn distance(p: &Coord, q: &Coord, radius: f64) -> f64 {
    assert!(
        radius.is_finite() && radius > 0.0,
        "sphere radius must be positive and finite, got {}",
        radius
    );
    angle(p, q) * radius
}

/// Calculates the great-circle distance between two coordinates on Earth,
/// in the requested [Unit].
pub fn distance_earth(p: &Coord, q: &Coord, unit: Unit) -> f64 {
    distance(p, q, unit.earth_radius())
}

/// Great-circle distance on Earth, in statute miles.
pub fn distance_mi(p: &Coord, q: &Coord) -> f64 {
    distance_earth(p, q, Unit::StatuteMiles)
}

/// Great-circle distance on Earth, in kilometers.
pub fn distance_km(p: &Coord, q: &Coord) -> f64 {
    distance_earth(p, q, Unit::Kilometers)
}

/// Great-circle distance on Earth, in nautical miles.
pub fn distance_nm(p: &Coord, q: &Coord) -> f64 {
    distance_earth(p, q, Unit::NauticalMiles)
}

pub fn nm_to_mi(d: f64) -> f64 {
    Unit::NauticalMiles.convert(d, Unit::StatuteMiles)
}

pub fn nm_to_km(d: f64) -> f64 {
    Unit::NauticalMiles.convert(d, Unit::Kilometers)
}

pub fn km_to_nm(d: f64) -> f64 {
    Unit::Kilometers.convert(d, Unit::NauticalMiles)
}
