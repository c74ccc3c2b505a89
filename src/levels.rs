//! Zoom-band strategy selection.
//!
//! Maps a web-map zoom value (0 = whole world, ~20 = building level) to a
//! clustering strategy and the proximity-fallback distance threshold for
//! that band.

use crate::ClusterConfig;

/// Clustering strategy for a zoom band.
///
/// Each band carries the distance threshold used by the proximity
/// fallback when the data has no semantic location tags. At the local
/// level the threshold is carried but unused, since every point becomes
/// its own cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Below the regional zoom edge: group by country.
    Global { threshold_km: f64 },
    /// Between the regional and local edges: group by (country, region).
    Regional { threshold_km: f64 },
    /// At or above the local edge: one cluster per point.
    Local { threshold_km: f64 },
}

/// Select the clustering strategy for a zoom value.
///
/// Band edges are inclusive on the upper side: zoom 5.0 is regional,
/// zoom 10.0 is local. Non-finite or negative zoom values are clamped to
/// the nearest band rather than rejected, since zoom is driven by a UI
/// component and a transient bad frame must not take down the render
/// loop: NaN and negatives select Global, +inf selects Local.
pub fn select_strategy(zoom: f64, config: &ClusterConfig) -> Strategy {
    let zoom = if zoom.is_nan() { 0.0 } else { zoom.max(0.0) };

    if zoom < config.regional_min_zoom {
        Strategy::Global {
            threshold_km: config.global_threshold_km,
        }
    } else if zoom < config.local_min_zoom {
        Strategy::Regional {
            threshold_km: config.regional_threshold_km,
        }
    } else {
        Strategy::Local {
            threshold_km: config.local_threshold_km,
        }
    }
}
