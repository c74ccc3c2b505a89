//! Top-level LOD clustering entry point.
//!
//! Dispatches the zoom value to a strategy, runs the matching clusterer
//! and returns one cluster list covering every input point exactly once.

use log::debug;

use crate::grouping::{group_by_field, FieldKey};
use crate::levels::{select_strategy, Strategy};
use crate::proximity;
use crate::{Cluster, ClusterConfig, ClusterLevel, GeoPoint};

/// Cluster the point set for the given zoom level with default
/// configuration.
///
/// Deterministic and total for well-typed input: an empty point set
/// yields an empty cluster list, and the same `(points, zoom)` pair
/// always yields the same clusters.
pub fn cluster_data(points: &[GeoPoint], zoom: f64) -> Vec<Cluster> {
    cluster_data_with_config(points, zoom, &ClusterConfig::default())
}

/// Cluster the point set for the given zoom level.
///
/// Below zoom `regional_min_zoom` points group by country (missing
/// countries form an "Unknown" bucket, which is itself a valid cluster).
/// In the regional band they group by (country, region), with the place
/// name standing in for a missing region. At or above `local_min_zoom`
/// every point is its own cluster. The proximity fallback runs only when
/// the whole dataset lacks the semantic tags for the active band.
pub fn cluster_data_with_config(
    points: &[GeoPoint],
    zoom: f64,
    config: &ClusterConfig,
) -> Vec<Cluster> {
    if points.is_empty() {
        return Vec::new();
    }

    let clusters = match select_strategy(zoom, config) {
        Strategy::Global { threshold_km } => {
            if points.iter().any(|p| p.country.is_some()) {
                group_by_field(points, ClusterLevel::Country, |p| {
                    FieldKey::simple(p.country.as_deref().unwrap_or("Unknown"))
                })
            } else {
                by_distance_auto(points, threshold_km, ClusterLevel::Country, config)
            }
        }
        Strategy::Regional { threshold_km } => {
            if points.iter().any(|p| p.country.is_some() || p.region.is_some()) {
                group_by_field(points, ClusterLevel::Region, |p| {
                    let country = p.country.as_deref().unwrap_or("Unknown");
                    let region = p
                        .region
                        .as_deref()
                        .or(p.place.as_deref())
                        .unwrap_or("Unknown");
                    FieldKey {
                        group: format!("{country}/{region}"),
                        display: region.to_string(),
                    }
                })
            } else {
                by_distance_auto(points, threshold_km, ClusterLevel::Region, config)
            }
        }
        Strategy::Local { .. } => points.iter().map(local_cluster).collect(),
    };

    debug!(
        "clustered {} points into {} clusters at zoom {zoom}",
        points.len(),
        clusters.len()
    );
    clusters
}

fn by_distance_auto(
    points: &[GeoPoint],
    threshold_km: f64,
    level: ClusterLevel,
    config: &ClusterConfig,
) -> Vec<Cluster> {
    if points.len() > config.index_cutoff {
        proximity::group_by_distance_indexed(points, threshold_km, level)
    } else {
        proximity::group_by_distance(points, threshold_km, level)
    }
}

/// One cluster per point; the label is the point's place name, falling
/// back to country and finally the record id.
fn local_cluster(point: &GeoPoint) -> Cluster {
    let label = point
        .place
        .as_deref()
        .or(point.country.as_deref())
        .unwrap_or(&point.id)
        .to_string();
    Cluster::from_members(
        format!("local:{}", point.id),
        label,
        ClusterLevel::Local,
        vec![point.clone()],
    )
}
