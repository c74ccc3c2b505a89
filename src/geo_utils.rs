//! Geographic utilities (distance, centroid, offset calculations).

use crate::LatLng;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters (haversine).
pub fn haversine_distance(a: &LatLng, b: &LatLng) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

    // Rounding can push h fractionally above 1 for near-antipodal inputs;
    // clamp so asin stays defined.
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Planar arithmetic mean of coordinates.
///
/// Not a great-circle centroid; acceptable at map-display scale.
/// Returns (0, 0) for an empty slice.
pub fn compute_center(coords: &[LatLng]) -> LatLng {
    if coords.is_empty() {
        return LatLng::new(0.0, 0.0);
    }
    let n = coords.len() as f64;
    let lat_sum: f64 = coords.iter().map(|c| c.lat).sum();
    let lng_sum: f64 = coords.iter().map(|c| c.lng).sum();
    LatLng::new(lat_sum / n, lng_sum / n)
}

/// Destination point at `distance_m` from `origin` along `bearing_deg`
/// (0 = north, clockwise).
///
/// Small-offset approximation: the longitude step is scaled by
/// `1 / cos(lat)` so the radius holds in meters. cos(lat) is clamped near
/// the poles to keep the result finite.
pub fn offset_point(origin: &LatLng, bearing_deg: f64, distance_m: f64) -> LatLng {
    let bearing = bearing_deg.to_radians();
    let dlat = (distance_m * bearing.cos()) / EARTH_RADIUS_M;
    let lat_cos = origin.lat.to_radians().cos().max(1e-6);
    let dlng = (distance_m * bearing.sin()) / (EARTH_RADIUS_M * lat_cos);

    LatLng::new(origin.lat + dlat.to_degrees(), origin.lng + dlng.to_degrees())
}
