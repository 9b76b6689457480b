//! Flight route lookup by callsign (AeroDataBox via RapidAPI).

use serde::Deserialize;
use serde_json::Value;

use spotter_core::RouteInfo;

use crate::client::RapidApiClient;
use crate::error::{FeedError, FeedResult};

pub const DEFAULT_AERODATABOX_HOST: &str = "aerodatabox.p.rapidapi.com";

/// Client for flight metadata and airport distances.
#[derive(Debug, Clone)]
pub struct AeroDataBoxClient {
    pub(crate) api: RapidApiClient,
    pub(crate) host: String,
}

/// One candidate flight for a callsign. Every field may be absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlightRecord {
    great_circle_distance: Option<GreatCircleDistance>,
    departure: Option<FlightLeg>,
    arrival: Option<FlightLeg>,
    is_cargo: Option<bool>,
    aircraft: Option<AircraftInfo>,
    airline: Option<AirlineInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GreatCircleDistance {
    pub(crate) km: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct FlightLeg {
    airport: Option<AirportRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AirportRef {
    municipality_name: Option<String>,
    icao: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AircraftInfo {
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AirlineInfo {
    name: Option<String>,
}

impl AeroDataBoxClient {
    pub fn new(api: RapidApiClient, host: impl Into<String>) -> Self {
        Self {
            api,
            host: host.into(),
        }
    }

    /// Route metadata for a callsign. The source may return several
    /// candidate flights (callsigns get reused across days); the first one
    /// is used. `Ok(None)` when the callsign is empty or nothing matched.
    pub async fn fetch_route(&self, callsign: &str) -> FeedResult<Option<RouteInfo>> {
        if callsign.is_empty() {
            return Ok(None);
        }

        let path = format!("/flights/callsign/{}", callsign);
        let payload = self.api.get_json(&self.host, &path).await?;
        parse_route(payload)
    }
}

fn parse_route(payload: Value) -> FeedResult<Option<RouteInfo>> {
    if payload.is_null() {
        return Ok(None);
    }
    let records: Vec<FlightRecord> = serde_json::from_value(payload)
        .map_err(|err| FeedError::MalformedResponse(format!("flight list: {}", err)))?;

    Ok(records.into_iter().next().map(route_info))
}

fn route_info(record: FlightRecord) -> RouteInfo {
    let (departure_city, departure_icao) = leg_fields(record.departure);
    let (arrival_city, arrival_icao) = leg_fields(record.arrival);

    RouteInfo {
        distance_km: record
            .great_circle_distance
            .and_then(|d| d.km)
            .map(|km| km.round() as u32)
            .filter(|km| *km > 0),
        departure_city,
        departure_icao,
        arrival_city,
        arrival_icao,
        model: record.aircraft.and_then(|a| a.model),
        airline: record.airline.and_then(|a| a.name),
        is_cargo: record.is_cargo,
    }
}

fn leg_fields(leg: Option<FlightLeg>) -> (Option<String>, Option<String>) {
    match leg.and_then(|l| l.airport) {
        Some(airport) => (airport.municipality_name, airport.icao),
        None => (None, None),
    }
}
