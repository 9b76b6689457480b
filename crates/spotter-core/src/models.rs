//! Core data models for aircraft sightings.

use serde::{Deserialize, Serialize};

/// Raw aircraft record from the ADS-B feed, one poll's worth of state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservedAircraft {
    /// Transponder hex code, unique per airframe. Dedup key.
    pub icao: String,
    pub registration: String,
    pub type_code: String,
    pub callsign: String,
    pub operator_icao: String,
    /// Barometric altitude in feet, clamped non-negative.
    pub altitude_ft: u32,
    pub ground_speed_kt: f64,
    /// Distance from the observation point in nautical miles.
    pub distance_nm: f64,
    pub on_ground: bool,
}

/// Route metadata looked up for a callsign. Every field is independently
/// optional; absent wire fields stay `None` rather than defaulting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteInfo {
    pub distance_km: Option<u32>,
    pub departure_city: Option<String>,
    pub departure_icao: Option<String>,
    pub arrival_city: Option<String>,
    pub arrival_icao: Option<String>,
    pub model: Option<String>,
    pub airline: Option<String>,
    pub is_cargo: Option<bool>,
}

/// A selected aircraft plus everything the enrichment lookups could find
/// about its flight. Fields only move from unknown to known; nothing resets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrichedFlight {
    pub icao: String,
    pub registration: String,
    pub type_code: String,
    pub callsign: String,
    pub operator_icao: String,
    pub altitude_ft: u32,
    pub distance_nm: f64,
    pub departure_city: Option<String>,
    pub departure_icao: Option<String>,
    pub arrival_city: Option<String>,
    pub arrival_icao: Option<String>,
    /// Aircraft model, truncated to its base designator by `finalize`.
    pub model: Option<String>,
    pub airline: Option<String>,
    #[serde(default)]
    pub is_cargo: bool,
    /// Great-circle route length. `None` means unknown.
    pub route_distance_km: Option<u32>,
    /// Whole metric tons. `Some` iff `route_distance_km` is known.
    pub co2_tons: Option<u32>,
}

impl EnrichedFlight {
    /// Seed a flight from a selected sighting.
    pub fn from_observed(observed: &ObservedAircraft) -> Self {
        Self {
            icao: observed.icao.clone(),
            registration: observed.registration.clone(),
            type_code: observed.type_code.clone(),
            callsign: observed.callsign.clone(),
            operator_icao: observed.operator_icao.clone(),
            altitude_ft: observed.altitude_ft,
            distance_nm: observed.distance_nm,
            ..Self::default()
        }
    }

    /// Merge route lookup results. Only fills fields that are still unknown,
    /// so data merged earlier keeps precedence.
    pub fn apply_route(&mut self, route: RouteInfo) {
        fill(&mut self.route_distance_km, route.distance_km);
        fill_text(&mut self.departure_city, route.departure_city);
        fill_text(&mut self.departure_icao, route.departure_icao);
        fill_text(&mut self.arrival_city, route.arrival_city);
        fill_text(&mut self.arrival_icao, route.arrival_icao);
        fill_text(&mut self.model, route.model);
        fill_text(&mut self.airline, route.airline);
        if let Some(cargo) = route.is_cargo {
            self.is_cargo = cargo;
        }
    }

    /// Record a route distance from the fallback lookup, unless the route
    /// lookup already supplied one.
    pub fn set_route_distance(&mut self, km: u32) {
        if self.route_distance_km.is_none() && km > 0 {
            self.route_distance_km = Some(km);
        }
    }

    /// Derive the CO2 estimate and simplify the model name. Idempotent;
    /// called once at the end of enrichment.
    pub fn finalize(&mut self, co2_kg_per_km: u32) {
        if let Some(km) = self.route_distance_km {
            self.co2_tons = Some(crate::emissions::co2_tons(km, co2_kg_per_km));
        }
        if let Some(model) = self.model.take() {
            self.model = Some(base_model(&model));
        }
    }
}

fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

fn fill_text(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_none() {
        *slot = value.filter(|text| !text.is_empty());
    }
}

/// Cut a model designator at the first variant separator:
/// "A320-200" -> "A320", "B737/800" -> "B737".
pub fn base_model(model: &str) -> String {
    match model.find(['-', '/']) {
        Some(index) => model[..index].to_string(),
        None => model.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed() -> ObservedAircraft {
        ObservedAircraft {
            icao: "3C65A2".to_string(),
            registration: "D-AIUW".to_string(),
            type_code: "A320".to_string(),
            callsign: "DLH123".to_string(),
            operator_icao: "DLH".to_string(),
            altitude_ft: 12_000,
            ground_speed_kt: 310.0,
            distance_nm: 3.4,
            on_ground: false,
        }
    }

    #[test]
    fn from_observed_copies_identity_and_position() {
        let flight = EnrichedFlight::from_observed(&observed());
        assert_eq!(flight.icao, "3C65A2");
        assert_eq!(flight.registration, "D-AIUW");
        assert_eq!(flight.altitude_ft, 12_000);
        assert_eq!(flight.distance_nm, 3.4);
        assert!(flight.route_distance_km.is_none());
        assert!(!flight.is_cargo);
    }

    #[test]
    fn apply_route_fills_only_unknown_fields() {
        let mut flight = EnrichedFlight::from_observed(&observed());
        flight.apply_route(RouteInfo {
            distance_km: Some(450),
            departure_city: Some("Berlin".to_string()),
            ..RouteInfo::default()
        });
        // A later merge must not overwrite what is already known.
        flight.apply_route(RouteInfo {
            distance_km: Some(900),
            departure_city: Some("Munich".to_string()),
            arrival_city: Some("Paris".to_string()),
            ..RouteInfo::default()
        });

        assert_eq!(flight.route_distance_km, Some(450));
        assert_eq!(flight.departure_city.as_deref(), Some("Berlin"));
        assert_eq!(flight.arrival_city.as_deref(), Some("Paris"));
    }

    #[test]
    fn apply_route_ignores_empty_strings() {
        let mut flight = EnrichedFlight::from_observed(&observed());
        flight.apply_route(RouteInfo {
            departure_city: Some(String::new()),
            ..RouteInfo::default()
        });
        assert!(flight.departure_city.is_none());
    }

    #[test]
    fn set_route_distance_is_a_fallback_only() {
        let mut flight = EnrichedFlight::from_observed(&observed());
        flight.set_route_distance(800);
        assert_eq!(flight.route_distance_km, Some(800));

        flight.set_route_distance(100);
        assert_eq!(flight.route_distance_km, Some(800));
    }

    #[test]
    fn finalize_computes_co2_and_truncates_model() {
        let mut flight = EnrichedFlight::from_observed(&observed());
        flight.model = Some("A320-200".to_string());
        flight.route_distance_km = Some(450);
        flight.finalize(12);

        assert_eq!(flight.co2_tons, Some(5));
        assert_eq!(flight.model.as_deref(), Some("A320"));
    }

    #[test]
    fn finalize_without_distance_leaves_co2_unknown() {
        let mut flight = EnrichedFlight::from_observed(&observed());
        flight.finalize(12);
        assert!(flight.co2_tons.is_none());
    }

    #[test]
    fn base_model_truncation() {
        assert_eq!(base_model("A320-200"), "A320");
        assert_eq!(base_model("B737/800"), "B737");
        assert_eq!(base_model("A350"), "A350");
    }
}
