// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::*;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_coord_new(lat: f64, lon: f64, out: *mut Coord) -> bool {
    match Coord::new(lat, lon) {
        Ok(coord) => {
            if let Some(out) = out.as_mut() {
                *out = coord;
            }
            true
        }

        Err(e) => {
            log::warn!("greatcircle_coord_new: {}", e);
            false
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_coord_antipode(coord: *const Coord, out: *mut Coord) -> bool {
    if let (Some(coord), Some(out)) = (coord.as_ref(), out.as_mut()) {
        *out = coord.antipode();
        true
    } else {
        false
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_coord_get_lat_lng(coord: *const Coord) -> LatLng {
    coord
        .as_ref()
        .map(|c| c.lat_lng())
        .unwrap_or(LatLng::new(f64::NAN, f64::NAN))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_coord_get_point(coord: *const Coord) -> Point {
    coord.as_ref().map(|c| c.point()).unwrap_or(Point {
        x: f64::NAN,
        y: f64::NAN,
        z: f64::NAN,
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_angle(p: *const Coord, q: *const Coord) -> f64 {
    match (p.as_ref(), q.as_ref()) {
        (Some(p), Some(q)) => angle(p, q),
        _ => f64::NAN,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_distance(
    p: *const Coord,
    q: *const Coord,
    radius: f64,
) -> f64 {
    if !(radius.is_finite() && radius > 0.0) {
        log::warn!("greatcircle_distance: invalid sphere radius {}", radius);
        return f64::NAN;
    }

    match (p.as_ref(), q.as_ref()) {
        (Some(p), Some(q)) => distance(p, q, radius),
        _ => f64::NAN,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_distance_earth(
    p: *const Coord,
    q: *const Coord,
    unit: Unit,
) -> f64 {
    greatcircle_distance(p, q, unit.earth_radius())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_distance_mi(p: *const Coord, q: *const Coord) -> f64 {
    greatcircle_distance_earth(p, q, Unit::StatuteMiles)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_distance_km(p: *const Coord, q: *const Coord) -> f64 {
    greatcircle_distance_earth(p, q, Unit::Kilometers)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_distance_nm(p: *const Coord, q: *const Coord) -> f64 {
    greatcircle_distance_earth(p, q, Unit::NauticalMiles)
}

#[unsafe(no_mangle)]
pub extern "C" fn greatcircle_nm_to_mi(d: f64) -> f64 {
    nm_to_mi(d)
}

#[unsafe(no_mangle)]
pub extern "C" fn greatcircle_nm_to_km(d: f64) -> f64 {
    nm_to_km(d)
}

#[unsafe(no_mangle)]
pub extern "C" fn greatcircle_km_to_nm(d: f64) -> f64 {
    km_to_nm(d)
}
