// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Great-circle angles and distances between points on a sphere.
//!
//! Positions are given as latitude and longitude in degrees and turned into
//! a [Coord], which also holds the matching point on the unit sphere.
//! The central angle between two coords can then be scaled by any radius,
//! which gives the length of the shortest path along the surface of that sphere.
//! Shortcuts are provided for Earth, in statute miles, kilometers and nautical miles.
//!
//! The model is a perfect sphere. Expect errors of up to about 0.5% compared
//! to distances computed on an ellipsoid.
//!
//! # Example
//!
//! ```
//! let austin = greatcircle::Coord::new(30.2672, -97.7431).unwrap();
//! let palo_alto = greatcircle::Coord::new(37.4419, -122.1430).unwrap();
//!
//! let nm = greatcircle::distance_nm(&austin, &palo_alto);
//! assert_eq!(format!("{:.1}", nm), "1286.1");
//!
//! // The same trip on the Moon
//! let moon = greatcircle::distance(&austin, &palo_alto, 937.9);
//! assert!(moon < nm);
//!
//! let degrees = greatcircle::angle(&austin, &palo_alto).to_degrees();
//! assert_eq!(format!("{:.1}", degrees), "21.4");
//! ```

pub mod c;
mod coord;
mod distance;

pub use coord::{normalize, Coord, Error, LatLng, Point};
pub use distance::{
    angle, angular_separation, distance, distance_earth, distance_km, distance_mi, distance_nm,
    km_to_nm, nm_to_km, nm_to_mi, Unit, EARTH_RADIUS_KM, EARTH_RADIUS_MI, EARTH_RADIUS_NM,
};
