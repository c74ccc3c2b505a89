//! Tests for geo_utils module

use pincluster::geo_utils::*;
use pincluster::LatLng;

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[test]
fn test_haversine_distance_same_point() {
    let p = LatLng::new(51.5074, -0.1278);
    assert_eq!(haversine_distance(&p, &p), 0.0);
}

#[test]
fn test_haversine_distance_known_value() {
    // London to Paris is approximately 344 km
    let london = LatLng::new(51.5074, -0.1278);
    let paris = LatLng::new(48.8566, 2.3522);
    let dist = haversine_distance(&london, &paris);
    assert!(approx_eq(dist, 343_560.0, 5000.0)); // Within 5km
}

#[test]
fn test_haversine_distance_antipodal_is_finite() {
    // Rounding can push the haversine term fractionally above 1 for
    // exactly antipodal inputs; the result must stay ~pi * R, not NaN
    let a = LatLng::new(10.0, 20.0);
    let b = LatLng::new(-10.0, -160.0);
    let dist = haversine_distance(&a, &b);
    assert!(dist.is_finite());
    assert!(approx_eq(dist, std::f64::consts::PI * EARTH_RADIUS_M, 1.0));
}

#[test]
fn test_haversine_distance_symmetric() {
    let a = LatLng::new(28.6139, 77.2090);
    let b = LatLng::new(19.0760, 72.8777);
    assert!(approx_eq(
        haversine_distance(&a, &b),
        haversine_distance(&b, &a),
        1e-9
    ));
}

#[test]
fn test_compute_center_exact_mean() {
    let coords = vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 2.0)];
    let center = compute_center(&coords);
    assert_eq!(center.lat, 0.0);
    assert_eq!(center.lng, 1.0);
}

#[test]
fn test_compute_center_empty() {
    let empty: Vec<LatLng> = vec![];
    let center = compute_center(&empty);
    assert_eq!(center.lat, 0.0);
    assert_eq!(center.lng, 0.0);
}

#[test]
fn test_offset_point_preserves_distance() {
    let origin = LatLng::new(48.8566, 2.3522);
    for bearing in [0.0, 45.0, 90.0, 180.0, 270.0] {
        let moved = offset_point(&origin, bearing, 100.0);
        let dist = haversine_distance(&origin, &moved);
        assert!(
            approx_eq(dist, 100.0, 1.0),
            "bearing {bearing}: distance was {dist}"
        );
    }
}

#[test]
fn test_offset_point_north_increases_latitude() {
    let origin = LatLng::new(10.0, 20.0);
    let moved = offset_point(&origin, 0.0, 1000.0);
    assert!(moved.lat > origin.lat);
    assert!(approx_eq(moved.lng, origin.lng, 1e-9));
}

#[test]
fn test_offset_point_east_increases_longitude() {
    let origin = LatLng::new(10.0, 20.0);
    let moved = offset_point(&origin, 90.0, 1000.0);
    assert!(moved.lng > origin.lng);
    assert!(approx_eq(moved.lat, origin.lat, 1e-6));
}
