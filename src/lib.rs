//! # Pin Cluster
//!
//! Level-of-detail (LOD) clustering engine for the travel map: partitions
//! geo-tagged records (journeys and ephemeral stories) into visually
//! distinct clusters for the current zoom level, and fans out coincident
//! members into a radial layout ("spiderify") so individual pins stay
//! selectable.
//!
//! This library provides:
//! - Normalization of heterogeneous source records into [`GeoPoint`]s
//! - Administrative clustering by country or (country, region)
//! - Proximity (distance-threshold) clustering when semantic tags are absent
//! - Zoom-band strategy selection with per-band distance thresholds
//! - Radial spiderify layout for coincident cluster members
//!
//! Every function is pure and synchronous: the caller owns the point set
//! and the zoom value, and re-invokes [`cluster_data`] whenever either
//! changes. Identical inputs always produce identical clusters, so results
//! are safe to cache by `(points, zoom)`.
//!
//! ## Features
//!
//! - **`parallel`** - Parallel record normalization with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use pincluster::{cluster_data, expand_cluster, GeoPoint};
//!
//! let points = vec![
//!     GeoPoint::new("journey-1", 28.6139, 77.2090).with_country("India"),
//!     GeoPoint::new("journey-2", 19.0760, 72.8777).with_country("India"),
//!     GeoPoint::new("story-1", 35.6762, 139.6503).with_country("Japan"),
//! ];
//!
//! // Zoom 2 = country level: "India (2 places)" and "Japan (1 places)"
//! let clusters = cluster_data(&points, 2.0);
//! assert_eq!(clusters.len(), 2);
//!
//! // Fan out the Indian cluster for selection
//! let spider = expand_cluster(&clusters[0], 50.0);
//! assert_eq!(spider.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{ClusterError, Result};

// Geographic utilities (distance, centroid, offset calculations)
pub mod geo_utils;

// Record normalization (journeys/stories -> GeoPoint)
pub mod normalize;
#[cfg(feature = "parallel")]
pub use normalize::normalize_parallel;
pub use normalize::{normalize, normalize_json};

// Zoom-band strategy selection
pub mod levels;
pub use levels::{select_strategy, Strategy};

// Administrative clustering (country / region grouping)
pub mod grouping;
pub use grouping::{group_by_field, FieldKey};

// Proximity clustering fallback (distance-threshold grouping)
pub mod proximity;
pub use proximity::{group_by_distance, group_by_distance_indexed};

// Top-level LOD clustering entry point
pub mod cluster;
pub use cluster::{cluster_data, cluster_data_with_config};

// Spiderify layout for coincident members
pub mod spiderify;
pub use spiderify::{expand_cluster, expand_cluster_with_config};

// ============================================================================
// Core Types
// ============================================================================

/// A bare geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A normalized geo-tagged record: the uniform input unit for clustering.
///
/// Created fresh on every normalization pass and discarded when the
/// corresponding cluster set is replaced; nothing here is persisted.
///
/// # Example
/// ```
/// use pincluster::GeoPoint;
/// let point = GeoPoint::new("journey-42", 51.5074, -0.1278).with_country("United Kingdom");
/// assert!(point.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Stable unique identifier, traceable back to the source record.
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Semantic country tag, e.g. "India".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Semantic region tag (state/province), e.g. "Rajasthan".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Place label fallback (city or place name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    /// Opaque reference back to the originating record, for downstream
    /// rendering. Clustering logic never inspects it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl GeoPoint {
    /// Create a new point with no semantic tags.
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            country: None,
            region: None,
            place: None,
            payload: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat >= -90.0
            && self.lat <= 90.0
            && self.lng >= -180.0
            && self.lng <= 180.0
    }

    /// The point's coordinate.
    pub fn coord(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Bounding box for a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from points. Returns `None` for an empty slice.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for p in points {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Which clustering strategy produced a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterLevel {
    Country,
    Region,
    Local,
}

/// A group of points produced by one clustering pass.
///
/// For a single [`cluster_data`] call, every input point appears in exactly
/// one cluster's `members`, so cluster counts sum to the input length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Derived key, unique within one clustering pass
    /// (e.g. `"country:India"`, `"proximity:story-7"`).
    pub id: String,
    /// Planar arithmetic mean of member coordinates. Not a great-circle
    /// centroid; acceptable at map-display scale.
    pub centroid: LatLng,
    /// The points assigned to this cluster, in input order.
    pub members: Vec<GeoPoint>,
    /// Human-readable summary, e.g. "India (12 places)".
    pub label: String,
    pub level: ClusterLevel,
    /// Bounding box of the members, for zoom-to-fit.
    pub bounds: Bounds,
}

impl Cluster {
    /// Build a cluster from its members, computing centroid and bounds.
    ///
    /// # Panics
    /// Panics if `members` is empty; clusters always hold at least one
    /// member.
    pub fn from_members(
        id: impl Into<String>,
        label: impl Into<String>,
        level: ClusterLevel,
        members: Vec<GeoPoint>,
    ) -> Self {
        assert!(!members.is_empty(), "cluster must have at least one member");
        let coords: Vec<LatLng> = members.iter().map(GeoPoint::coord).collect();
        let centroid = geo_utils::compute_center(&coords);
        let bounds = Bounds::from_points(&members).expect("members is non-empty");
        Self {
            id: id.into(),
            centroid,
            members,
            label: label.into(),
            level,
            bounds,
        }
    }

    /// Number of members, always >= 1.
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// A temporary offset coordinate for one member of an expanded cluster.
///
/// Computed on demand by [`expand_cluster`] and owned by the rendering
/// layer; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiderPosition {
    pub point_id: String,
    pub lat: f64,
    pub lng: f64,
}

/// Configuration for the clustering engine.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Zoom at which clustering switches from country to region grouping.
    /// Default: 5.0
    pub regional_min_zoom: f64,

    /// Zoom at which clustering switches to one cluster per point.
    /// Default: 10.0
    pub local_min_zoom: f64,

    /// Proximity-fallback threshold below `regional_min_zoom`.
    /// Default: 500.0 km
    pub global_threshold_km: f64,

    /// Proximity-fallback threshold in the regional band.
    /// Default: 100.0 km
    pub regional_threshold_km: f64,

    /// Proximity-fallback threshold at or above `local_min_zoom`.
    /// Default: 10.0 km
    pub local_threshold_km: f64,

    /// Fixed phase offset in degrees for the spiderify layout, to avoid
    /// axis-aligned artifacts. Default: 0.0
    pub spider_phase_deg: f64,

    /// Point count above which the proximity clusterer switches to the
    /// R-tree pre-filter. Default: 256
    pub index_cutoff: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            regional_min_zoom: 5.0,
            local_min_zoom: 10.0,
            global_threshold_km: 500.0,
            regional_threshold_km: 100.0,
            local_threshold_km: 10.0,
            spider_phase_deg: 0.0,
            index_cutoff: 256,
        }
    }
}
