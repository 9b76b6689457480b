//! One poll cycle end to end: fetch, select, dedup, enrich.

use spotter_core::{select_new, EnrichedFlight, SeenLedger};
use spotter_feeds::{enrich_flight, AdsbClient, AeroDataBoxClient, RapidApiClient};

use crate::config::Config;

/// Owns the feed clients and the seen-ledger for the process lifetime.
pub struct Pipeline {
    adsb: AdsbClient,
    flight_data: AeroDataBoxClient,
    ledger: SeenLedger,
    co2_kg_per_flight_km: u32,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        let api = RapidApiClient::new(&config.rapidapi_key, config.request_timeout);
        Self {
            adsb: AdsbClient::new(
                api.clone(),
                &config.adsb_host,
                config.latitude,
                config.longitude,
                config.radius,
            ),
            flight_data: AeroDataBoxClient::new(api, &config.aerodatabox_host),
            ledger: SeenLedger::new(),
            co2_kg_per_flight_km: config.co2_kg_per_flight_km,
        }
    }

    /// Run one cycle. At most one new aircraft comes back, fully enriched;
    /// `None` means nothing new this time (empty sky, already-announced
    /// aircraft, or an unavailable feed).
    pub async fn run_cycle(&mut self) -> Option<EnrichedFlight> {
        let observed = match self.adsb.fetch_nearby().await {
            Ok(observed) => observed,
            Err(err) => {
                tracing::warn!("nearby aircraft fetch failed: {}", err);
                return None;
            }
        };

        let Some(candidate) = select_new(&observed, &mut self.ledger) else {
            tracing::debug!("no new aircraft found");
            return None;
        };

        let flight = EnrichedFlight::from_observed(&candidate);
        let flight = enrich_flight(&self.flight_data, flight, self.co2_kg_per_flight_km).await;

        tracing::info!(
            "new aircraft: {} icao:{} type:{} alt:{} dst:{:.2} op:{} call:{} {} -> {} ({} km, {} t CO2)",
            flight.registration,
            flight.icao,
            flight.type_code,
            flight.altitude_ft,
            flight.distance_nm,
            flight.operator_icao,
            flight.callsign,
            flight.departure_city.as_deref().unwrap_or("?"),
            flight.arrival_city.as_deref().unwrap_or("?"),
            flight.route_distance_km.unwrap_or(0),
            flight.co2_tons.unwrap_or(0),
        );

        Some(flight)
    }

    /// How many distinct aircraft have been announced so far.
    pub fn announced_count(&self) -> usize {
        self.ledger.len()
    }
}
