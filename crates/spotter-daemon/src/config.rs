//! Daemon configuration from environment.

use std::env;
use std::time::Duration;

use spotter_core::DEFAULT_CO2_KG_PER_FLIGHT_KM;
use spotter_feeds::client::DEFAULT_REQUEST_TIMEOUT;
use spotter_feeds::{SearchRadius, DEFAULT_ADSB_HOST, DEFAULT_AERODATABOX_HOST};

#[derive(Debug, Clone)]
pub struct Config {
    /// Observation point.
    pub latitude: f64,
    pub longitude: f64,
    pub radius: SearchRadius,
    /// Flights touching this airport are "departing"/"arriving".
    pub home_icao: String,
    pub rapidapi_key: String,
    pub adsb_host: String,
    pub aerodatabox_host: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub co2_kg_per_flight_km: u32,
    pub cries_per_co2_ton: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // Defaults watch the southern approach of BER.
            latitude: parse_env("SPOTTER_LAT", 52.364598),
            longitude: parse_env("SPOTTER_LON", 13.471815),
            radius: env::var("SPOTTER_RADIUS_NM")
                .ok()
                .and_then(|s| s.parse().ok())
                .and_then(SearchRadius::from_nm)
                .unwrap_or(SearchRadius::Nm5),
            home_icao: env::var("SPOTTER_HOME_ICAO").unwrap_or_else(|_| "EDDB".to_string()),
            rapidapi_key: env::var("SPOTTER_RAPIDAPI_KEY").unwrap_or_default(),
            adsb_host: env::var("SPOTTER_ADSB_HOST")
                .unwrap_or_else(|_| DEFAULT_ADSB_HOST.to_string()),
            aerodatabox_host: env::var("SPOTTER_AERODATABOX_HOST")
                .unwrap_or_else(|_| DEFAULT_AERODATABOX_HOST.to_string()),
            poll_interval: Duration::from_secs(parse_env("SPOTTER_INTERVAL_SECS", 15u64)),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            co2_kg_per_flight_km: parse_env("SPOTTER_CO2_KG_PER_KM", DEFAULT_CO2_KG_PER_FLIGHT_KM),
            cries_per_co2_ton: parse_env("SPOTTER_CRIES_PER_TON", 5),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
