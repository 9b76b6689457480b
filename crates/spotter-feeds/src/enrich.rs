//! Enrichment: fuse route and distance lookups into a selected flight.

use spotter_core::{EnrichedFlight, RouteInfo};

use crate::error::FeedResult;
use crate::route::AeroDataBoxClient;

/// The lookups enrichment depends on. Implemented by [`AeroDataBoxClient`];
/// tests substitute canned answers.
pub trait FlightLookup {
    fn route(
        &self,
        callsign: &str,
    ) -> impl std::future::Future<Output = FeedResult<Option<RouteInfo>>> + Send;

    fn distance(
        &self,
        from_icao: &str,
        to_icao: &str,
    ) -> impl std::future::Future<Output = FeedResult<Option<u32>>> + Send;
}

impl FlightLookup for AeroDataBoxClient {
    async fn route(&self, callsign: &str) -> FeedResult<Option<RouteInfo>> {
        self.fetch_route(callsign).await
    }

    async fn distance(&self, from_icao: &str, to_icao: &str) -> FeedResult<Option<u32>> {
        self.fetch_distance(from_icao, to_icao).await
    }
}

/// Fill in as much flight data as the sources will give. Never fails: every
/// lookup error degrades to the corresponding fields staying unknown.
///
/// The route lookup runs first because it is the richer source and it wins
/// on overlapping fields. The distance lookup is a narrower fallback, only
/// worth a network call when the distance is still unknown and both
/// endpoints are.
pub async fn enrich_flight<L: FlightLookup>(
    lookup: &L,
    mut flight: EnrichedFlight,
    co2_kg_per_km: u32,
) -> EnrichedFlight {
    match lookup.route(&flight.callsign).await {
        Ok(Some(route)) => flight.apply_route(route),
        Ok(None) => {
            tracing::debug!("{}: no route data for callsign", flight.registration);
        }
        Err(err) => {
            tracing::warn!("{}: route lookup failed: {}", flight.registration, err);
        }
    }

    if flight.route_distance_km.is_none() {
        if let (Some(from), Some(to)) = (
            flight.departure_icao.clone(),
            flight.arrival_icao.clone(),
        ) {
            match lookup.distance(&from, &to).await {
                Ok(Some(km)) => flight.set_route_distance(km),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!("{}: distance lookup failed: {}", flight.registration, err);
                }
            }
        }
    }

    flight.finalize(co2_kg_per_km);
    flight
}
