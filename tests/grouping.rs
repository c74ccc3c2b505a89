//! Tests for grouping module (administrative clustering)

use pincluster::{group_by_field, ClusterLevel, FieldKey, GeoPoint};

fn tagged(id: &str, lat: f64, lng: f64, country: &str) -> GeoPoint {
    GeoPoint::new(id, lat, lng).with_country(country)
}

fn by_country(p: &GeoPoint) -> FieldKey {
    FieldKey::simple(p.country.as_deref().unwrap_or("Unknown"))
}

#[test]
fn test_group_by_country() {
    let points = vec![
        tagged("1", 28.6, 77.2, "India"),
        tagged("2", 19.0, 72.8, "India"),
        tagged("3", 35.6, 139.6, "Japan"),
    ];

    let clusters = group_by_field(&points, ClusterLevel::Country, by_country);

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].id, "country:India");
    assert_eq!(clusters[0].label, "India (2 places)");
    assert_eq!(clusters[0].count(), 2);
    let member_ids: Vec<&str> = clusters[0].members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(member_ids, ["1", "2"]);

    // The singular count suffix is not pluralized
    assert_eq!(clusters[1].label, "Japan (1 places)");
    assert_eq!(clusters[1].members[0].id, "3");
}

#[test]
fn test_grouping_is_case_sensitive() {
    let points = vec![
        tagged("1", 28.6, 77.2, "India"),
        tagged("2", 19.0, 72.8, "india"),
    ];

    let clusters = group_by_field(&points, ClusterLevel::Country, by_country);
    assert_eq!(clusters.len(), 2);
}

#[test]
fn test_missing_country_forms_unknown_bucket() {
    let points = vec![
        tagged("1", 28.6, 77.2, "India"),
        GeoPoint::new("2", 0.0, 0.0),
        GeoPoint::new("3", 1.0, 1.0),
    ];

    let clusters = group_by_field(&points, ClusterLevel::Country, by_country);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[1].label, "Unknown (2 places)");
    assert_eq!(clusters[1].count(), 2);
}

#[test]
fn test_centroid_is_planar_mean() {
    let points = vec![tagged("1", 0.0, 0.0, "X"), tagged("2", 0.0, 2.0, "X")];

    let clusters = group_by_field(&points, ClusterLevel::Country, by_country);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].centroid.lat, 0.0);
    assert_eq!(clusters[0].centroid.lng, 1.0);
}

#[test]
fn test_output_order_follows_first_appearance() {
    let points = vec![
        tagged("1", 0.0, 0.0, "Chile"),
        tagged("2", 0.0, 0.0, "Argentina"),
        tagged("3", 0.0, 0.0, "Chile"),
        tagged("4", 0.0, 0.0, "Brazil"),
    ];

    let clusters = group_by_field(&points, ClusterLevel::Country, by_country);
    let labels: Vec<&str> = clusters.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Chile (2 places)", "Argentina (1 places)", "Brazil (1 places)"]
    );
}

#[test]
fn test_composite_key_separates_same_named_regions() {
    // "Punjab" exists in both India and Pakistan; the group key keeps
    // them apart while the display stays readable.
    let key_fn = |p: &GeoPoint| FieldKey {
        group: format!(
            "{}/{}",
            p.country.as_deref().unwrap_or("Unknown"),
            p.region.as_deref().unwrap_or("Unknown")
        ),
        display: p.region.clone().unwrap_or_else(|| "Unknown".to_string()),
    };

    let points = vec![
        GeoPoint::new("1", 31.1, 75.3).with_country("India").with_region("Punjab"),
        GeoPoint::new("2", 31.5, 74.3).with_country("Pakistan").with_region("Punjab"),
    ];

    let clusters = group_by_field(&points, ClusterLevel::Region, key_fn);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].id, "region:India/Punjab");
    assert_eq!(clusters[0].label, "Punjab (1 places)");
    assert_eq!(clusters[1].id, "region:Pakistan/Punjab");
}

#[test]
fn test_bounds_cover_members() {
    let points = vec![tagged("1", 10.0, 20.0, "X"), tagged("2", 12.0, 18.0, "X")];
    let clusters = group_by_field(&points, ClusterLevel::Country, by_country);
    let bounds = clusters[0].bounds;
    assert_eq!(bounds.min_lat, 10.0);
    assert_eq!(bounds.max_lat, 12.0);
    assert_eq!(bounds.min_lng, 18.0);
    assert_eq!(bounds.max_lng, 20.0);
}
