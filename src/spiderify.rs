//! Spiderify: radial expansion of coincident cluster members.
//!
//! When several records share (or nearly share) one coordinate at the
//! active zoom, the renderer asks for a non-overlapping radial layout so
//! each pin stays selectable. Deciding *when* members are visually
//! coincident (a pixel-distance test after projection) is the renderer's
//! job; this is pure geographic geometry.

use crate::geo_utils::offset_point;
use crate::{Cluster, ClusterConfig, SpiderPosition};

/// Expand a cluster into radial positions with default configuration.
pub fn expand_cluster(cluster: &Cluster, radius_meters: f64) -> Vec<SpiderPosition> {
    expand_cluster_with_config(cluster, radius_meters, &ClusterConfig::default())
}

/// Distribute the cluster's members evenly around a circle of
/// `radius_meters` centered on the centroid.
///
/// A single member stays at the unmodified centroid. For `count > 1`,
/// member `i` sits at bearing `phase + i * 360 / count`, so the returned
/// positions are pairwise distinct and all within `radius_meters` of the
/// centroid.
///
/// # Panics
/// Panics if the cluster has no members or `radius_meters` is not a
/// positive finite number; both are contract violations, since every
/// cluster produced by this crate holds at least one member.
pub fn expand_cluster_with_config(
    cluster: &Cluster,
    radius_meters: f64,
    config: &ClusterConfig,
) -> Vec<SpiderPosition> {
    assert!(
        !cluster.members.is_empty(),
        "expand_cluster called on a cluster with no members"
    );
    assert!(
        radius_meters.is_finite() && radius_meters > 0.0,
        "spiderify radius must be a positive finite number of meters"
    );

    if cluster.members.len() == 1 {
        return vec![SpiderPosition {
            point_id: cluster.members[0].id.clone(),
            lat: cluster.centroid.lat,
            lng: cluster.centroid.lng,
        }];
    }

    let step = 360.0 / cluster.members.len() as f64;
    cluster
        .members
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let bearing = config.spider_phase_deg + i as f64 * step;
            let position = offset_point(&cluster.centroid, bearing, radius_meters);
            SpiderPosition {
                point_id: member.id.clone(),
                lat: position.lat,
                lng: position.lng,
            }
        })
        .collect()
}
