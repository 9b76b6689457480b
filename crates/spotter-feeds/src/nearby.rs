//! Nearby-aircraft feed (ADS-B Exchange via RapidAPI).

use serde_json::Value;
use std::fmt;

use spotter_core::ObservedAircraft;

use crate::client::{value_f64, value_flag, value_str, RapidApiClient};
use crate::error::FeedResult;

pub const DEFAULT_ADSB_HOST: &str = "adsbexchange-com1.p.rapidapi.com";

/// Search radius classes the feed accepts, in nautical miles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRadius {
    Nm1,
    Nm5,
    Nm10,
    Nm25,
    Nm100,
    Nm250,
}

impl SearchRadius {
    pub fn as_nm(self) -> u16 {
        match self {
            SearchRadius::Nm1 => 1,
            SearchRadius::Nm5 => 5,
            SearchRadius::Nm10 => 10,
            SearchRadius::Nm25 => 25,
            SearchRadius::Nm100 => 100,
            SearchRadius::Nm250 => 250,
        }
    }

    pub fn from_nm(nm: u16) -> Option<Self> {
        match nm {
            1 => Some(SearchRadius::Nm1),
            5 => Some(SearchRadius::Nm5),
            10 => Some(SearchRadius::Nm10),
            25 => Some(SearchRadius::Nm25),
            100 => Some(SearchRadius::Nm100),
            250 => Some(SearchRadius::Nm250),
            _ => None,
        }
    }
}

impl fmt::Display for SearchRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_nm())
    }
}

/// Client for the nearby-aircraft list around a fixed observation point.
#[derive(Debug, Clone)]
pub struct AdsbClient {
    api: RapidApiClient,
    host: String,
    latitude: f64,
    longitude: f64,
    radius: SearchRadius,
}

impl AdsbClient {
    pub fn new(
        api: RapidApiClient,
        host: impl Into<String>,
        latitude: f64,
        longitude: f64,
        radius: SearchRadius,
    ) -> Self {
        Self {
            api,
            host: host.into(),
            latitude,
            longitude,
            radius,
        }
    }

    /// All aircraft the feed currently sees inside the search radius.
    /// One attempt per call; a failed cycle just tries again next time.
    pub async fn fetch_nearby(&self) -> FeedResult<Vec<ObservedAircraft>> {
        let path = format!(
            "/json/lat/{}/lon/{}/dist/{}/",
            self.latitude, self.longitude, self.radius
        );
        let payload = self.api.get_json(&self.host, &path).await?;

        let total = value_f64(payload.get("total")).unwrap_or(0.0) as u64;
        let observed = parse_nearby(&payload);
        tracing::debug!(
            "{} aircraft reported, {} with registration",
            total,
            observed.len()
        );
        Ok(observed)
    }
}

/// Normalize the `{total, ac: [...]}` payload. Records without a
/// registration are contacts the feed has not fully acquired yet; drop them.
fn parse_nearby(payload: &Value) -> Vec<ObservedAircraft> {
    let Some(records) = payload.get("ac").and_then(|v| v.as_array()) else {
        return Vec::new();
    };
    records.iter().filter_map(parse_aircraft).collect()
}

fn parse_aircraft(record: &Value) -> Option<ObservedAircraft> {
    let icao = value_str(record.get("icao")).filter(|s| !s.is_empty())?;
    let registration = value_str(record.get("reg")).filter(|s| !s.is_empty())?;

    Some(ObservedAircraft {
        icao,
        registration,
        type_code: value_str(record.get("type")).unwrap_or_default(),
        callsign: value_str(record.get("call")).unwrap_or_default(),
        operator_icao: value_str(record.get("opicao")).unwrap_or_default(),
        altitude_ft: value_f64(record.get("alt")).unwrap_or(0.0).max(0.0) as u32,
        ground_speed_kt: value_f64(record.get("spd")).unwrap_or(0.0),
        distance_nm: value_f64(record.get("dst")).unwrap_or(0.0).max(0.0),
        on_ground: value_flag(record.get("gnd")),
    })
}
