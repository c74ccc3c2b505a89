//! Proximity clustering: distance-threshold grouping used when semantic
//! location fields are absent from the data.
//!
//! The algorithm is single-linkage from a seed: iterate points in input
//! order, start a cluster at the first unassigned point, and absorb every
//! unassigned point within the threshold of the *seed*. Two members can
//! therefore be up to twice the threshold apart; this favors fewer,
//! denser clusters and is accepted behavior, not a bug.

use rstar::{RTree, RTreeObject, AABB};

use crate::geo_utils::{haversine_distance, EARTH_RADIUS_M};
use crate::{Cluster, ClusterLevel, GeoPoint};

/// Degrees of latitude per kilometer, slightly undersized so that the
/// derived envelope always covers the true distance threshold.
const KM_PER_DEGREE: f64 = 111.0;

/// Group points by distance to a seed point.
///
/// O(n^2) in the number of unassigned points; fine for the low thousands
/// of pins a travel map holds. [`group_by_distance_indexed`] is the
/// pre-filtered variant for larger inputs and produces identical
/// clusters.
pub fn group_by_distance(points: &[GeoPoint], threshold_km: f64, level: ClusterLevel) -> Vec<Cluster> {
    let threshold_m = threshold_km * 1000.0;
    let mut assigned = vec![false; points.len()];
    let mut clusters = Vec::new();

    for seed_idx in 0..points.len() {
        if assigned[seed_idx] {
            continue;
        }
        assigned[seed_idx] = true;
        let seed = &points[seed_idx];
        let mut members = vec![seed.clone()];

        for other_idx in seed_idx + 1..points.len() {
            if assigned[other_idx] {
                continue;
            }
            if haversine_distance(&seed.coord(), &points[other_idx].coord()) <= threshold_m {
                assigned[other_idx] = true;
                members.push(points[other_idx].clone());
            }
        }

        clusters.push(make_proximity_cluster(seed, members, level));
    }

    clusters
}

/// R-tree entry for one input point.
struct PointEntry {
    idx: usize,
    lat: f64,
    lng: f64,
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.lng, self.lat])
    }
}

/// Distance grouping with an R-tree pre-filter.
///
/// Candidates come from a degree-space envelope around the seed and are
/// confirmed with an exact haversine check, so membership is identical to
/// [`group_by_distance`]. No antimeridian handling: an envelope crossing
/// the 180th meridian will miss candidates on the far side, same as the
/// naive scan never crossed it either (the source data does not straddle
/// it).
pub fn group_by_distance_indexed(
    points: &[GeoPoint],
    threshold_km: f64,
    level: ClusterLevel,
) -> Vec<Cluster> {
    let entries: Vec<PointEntry> = points
        .iter()
        .enumerate()
        .map(|(idx, p)| PointEntry {
            idx,
            lat: p.lat,
            lng: p.lng,
        })
        .collect();
    let rtree = RTree::bulk_load(entries);

    let threshold_m = threshold_km * 1000.0;
    let mut assigned = vec![false; points.len()];
    let mut clusters = Vec::new();

    for seed_idx in 0..points.len() {
        if assigned[seed_idx] {
            continue;
        }
        assigned[seed_idx] = true;
        let seed = &points[seed_idx];

        let lat_pad = threshold_km / KM_PER_DEGREE;
        // Widest longitude delta of a distance circle around the seed:
        // asin(sin(r/R) / cos(lat)). Once the circle encloses a pole the
        // argument reaches 1 and every longitude qualifies. The exact
        // haversine check below rejects any false positives.
        let ratio = (threshold_m / EARTH_RADIUS_M).sin() / seed.lat.to_radians().cos();
        let lng_pad = if ratio >= 1.0 {
            180.0
        } else {
            ratio.asin().to_degrees()
        };
        let envelope = AABB::from_corners(
            [seed.lng - lng_pad, seed.lat - lat_pad],
            [seed.lng + lng_pad, seed.lat + lat_pad],
        );

        // Sort candidates so membership order matches the naive scan.
        let mut candidates: Vec<usize> = rtree
            .locate_in_envelope(&envelope)
            .map(|e| e.idx)
            .filter(|&i| i != seed_idx && !assigned[i])
            .collect();
        candidates.sort_unstable();

        let mut members = vec![seed.clone()];
        for idx in candidates {
            if haversine_distance(&seed.coord(), &points[idx].coord()) <= threshold_m {
                assigned[idx] = true;
                members.push(points[idx].clone());
            }
        }

        clusters.push(make_proximity_cluster(seed, members, level));
    }

    clusters
}

fn make_proximity_cluster(seed: &GeoPoint, members: Vec<GeoPoint>, level: ClusterLevel) -> Cluster {
    let display = seed
        .place
        .as_deref()
        .or(seed.country.as_deref())
        .unwrap_or("Unknown");
    let label = format!("{} ({} places)", display, members.len());
    let id = format!("proximity:{}", seed.id);
    Cluster::from_members(id, label, level, members)
}
