//! Airport-to-airport great-circle distance lookup (AeroDataBox).
//!
//! Fallback for when the route lookup knew the endpoints but not the
//! distance between them.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FeedError, FeedResult};
use crate::route::{AeroDataBoxClient, GreatCircleDistance};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DistanceRecord {
    great_circle_distance: Option<GreatCircleDistance>,
}

impl AeroDataBoxClient {
    /// Great-circle distance in kilometers between two airports. Returns
    /// `Ok(None)` without touching the network when either identifier is
    /// empty.
    pub async fn fetch_distance(
        &self,
        from_icao: &str,
        to_icao: &str,
    ) -> FeedResult<Option<u32>> {
        if from_icao.is_empty() || to_icao.is_empty() {
            return Ok(None);
        }

        let path = format!("/airports/icao/{}/distance-time/{}", from_icao, to_icao);
        let payload = self.api.get_json(&self.host, &path).await?;
        parse_distance(payload)
    }
}

fn parse_distance(payload: Value) -> FeedResult<Option<u32>> {
    if payload.is_null() {
        return Ok(None);
    }
    let record: DistanceRecord = serde_json::from_value(payload)
        .map_err(|err| FeedError::MalformedResponse(format!("distance: {}", err)))?;

    Ok(record
        .great_circle_distance
        .and_then(|d| d.km)
        .map(|km| km.round() as u32)
        .filter(|km| *km > 0))
}
