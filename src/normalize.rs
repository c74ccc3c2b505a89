//! Converts heterogeneous source records into uniform [`GeoPoint`]s.
//!
//! Journeys and stories arrive as loosely structured JSON with optional
//! `location.coordinates.{latitude,longitude}`, `location.country`,
//! `location.state` and `location.city`/`place_name` fields. Records
//! lacking valid coordinates are silently excluded; an absent location is
//! expected for many records, not an error.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::GeoPoint;

/// Raw source record shape, as produced by the journey/story stores.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub location: Option<RawLocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLocation {
    #[serde(default)]
    pub coordinates: Option<RawCoordinates>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub place_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawCoordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Normalize raw record values into [`GeoPoint`]s.
///
/// Records with a missing id, missing or malformed coordinates, or
/// out-of-range coordinates are skipped. Output order follows input
/// order, so the same input always yields the same output.
pub fn normalize(records: &[Value]) -> Vec<GeoPoint> {
    let points: Vec<GeoPoint> = records.iter().filter_map(normalize_record).collect();
    debug!("normalized {} of {} records", points.len(), records.len());
    points
}

/// Normalize a raw JSON array of records.
///
/// Returns an error only when the document itself is not a JSON array;
/// individual malformed records are skipped as in [`normalize`].
pub fn normalize_json(json: &str) -> Result<Vec<GeoPoint>> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    Ok(normalize(&records))
}

/// Normalize records in parallel with rayon.
///
/// Output is identical to [`normalize`], including order.
#[cfg(feature = "parallel")]
pub fn normalize_parallel(records: &[Value]) -> Vec<GeoPoint> {
    use rayon::prelude::*;

    let points: Vec<GeoPoint> = records.par_iter().filter_map(normalize_record).collect();
    debug!("normalized {} of {} records", points.len(), records.len());
    points
}

fn normalize_record(record: &Value) -> Option<GeoPoint> {
    let raw: RawRecord = serde_json::from_value(record.clone()).ok()?;

    // Ids come through as strings or numbers depending on the store.
    let id = match raw.id? {
        Value::String(s) if !s.is_empty() => s,
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    let location = raw.location?;
    let coords = location.coordinates?;
    let (lat, lng) = (coords.latitude?, coords.longitude?);

    let point = GeoPoint {
        id,
        lat,
        lng,
        country: location.country,
        region: location.state,
        place: location.city.or(location.place_name),
        payload: Some(record.clone()),
    };

    point.is_valid().then_some(point)
}
