//! Administrative clustering: grouping by semantic location fields.
//!
//! Used when records carry country/region tags. Grouping is by exact,
//! case-sensitive string equality on the key; "India" and "india" form
//! distinct groups, and normalizing casing is a caller responsibility.

use std::collections::HashMap;

use crate::{Cluster, ClusterLevel, GeoPoint};

/// Grouping key produced by a key function.
///
/// `group` drives membership (exact string equality) while `display` is
/// the human-readable part used in the cluster label. For country-level
/// grouping the two are the same; for region-level grouping the group key
/// includes the country so that same-named regions in different countries
/// stay apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKey {
    pub group: String,
    pub display: String,
}

impl FieldKey {
    /// A key whose group and display values are the same string.
    pub fn simple(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            display: value.clone(),
            group: value,
        }
    }
}

/// Group points whose key values are equal.
///
/// Labels always carry the count suffix, e.g. "India (12 places)". The
/// "(1 places)" singular form is intentional product copy; renderers
/// expect the suffix to be present on every administrative cluster.
///
/// Output order follows the first appearance of each key in the input,
/// so identical inputs produce identical cluster lists.
pub fn group_by_field<F>(points: &[GeoPoint], level: ClusterLevel, key_fn: F) -> Vec<Cluster>
where
    F: Fn(&GeoPoint) -> FieldKey,
{
    let mut key_order: Vec<FieldKey> = Vec::new();
    let mut buckets: HashMap<String, Vec<GeoPoint>> = HashMap::new();

    for point in points {
        let key = key_fn(point);
        if !buckets.contains_key(&key.group) {
            key_order.push(key.clone());
        }
        buckets.entry(key.group).or_default().push(point.clone());
    }

    key_order
        .into_iter()
        .map(|key| {
            let members = buckets.remove(&key.group).unwrap_or_default();
            let label = format!("{} ({} places)", key.display, members.len());
            let id = format!("{}:{}", level_prefix(level), key.group);
            Cluster::from_members(id, label, level, members)
        })
        .collect()
}

fn level_prefix(level: ClusterLevel) -> &'static str {
    match level {
        ClusterLevel::Country => "country",
        ClusterLevel::Region => "region",
        ClusterLevel::Local => "local",
    }
}
