//! Builds the spoken announcement for an enriched flight.

use rand::Rng;

use crate::models::EnrichedFlight;
use crate::phrases::{PhraseGroup, Phrasebook};

const FEET_TO_METERS: f64 = 0.3048;

/// Knobs for announcement phrasing.
#[derive(Debug, Clone)]
pub struct AnnouncementStyle {
    /// Airport the observer sits at; flights touching it are announced as
    /// departing or arriving rather than passing by.
    pub home_icao: String,
    /// One cry of despair per this many tons of CO2.
    pub cries_per_co2_ton: u32,
}

impl Default for AnnouncementStyle {
    fn default() -> Self {
        Self {
            home_icao: "EDDB".to_string(),
            cries_per_co2_ton: 5,
        }
    }
}

/// Ordered text fragments for one flight: description, route, emissions,
/// cries. Fragments with nothing to say come back empty so the sequence
/// shape is stable.
pub fn announcement_parts<R: Rng>(
    flight: &EnrichedFlight,
    style: &AnnouncementStyle,
    phrases: &Phrasebook,
    rng: &mut R,
) -> Vec<String> {
    let mut parts = Vec::with_capacity(4);

    let mut description: Vec<String> = Vec::new();
    push_phrase(&mut description, phrases.pick(PhraseGroup::Intro, rng));
    push_phrase(&mut description, phrases.pick(PhraseGroup::Sighting, rng));
    if let Some(airline) = flight.airline.as_deref() {
        description.push(airline.to_string());
    }
    if flight.is_cargo {
        description.push("cargo".to_string());
    }
    description.push(flight.model.clone().unwrap_or_else(|| "plane".to_string()));
    parts.push(description.join(" "));

    parts.push(route_phrase(flight, style));

    let co2 = flight.co2_tons.unwrap_or(0);
    if co2 > 0 {
        parts.push(format!(
            "and it produces another {co2} tons of carbon dioxide."
        ));
    } else {
        parts.push(".".to_string());
    }

    let cries = if co2 > 0 {
        // A zero divisor from config means one cry per ton.
        co2 / style.cries_per_co2_ton.max(1)
    } else {
        rng.random_range(2..5)
    };
    parts.push(vec!["ii"; cries as usize].join(" "));

    parts
}

fn route_phrase(flight: &EnrichedFlight, style: &AnnouncementStyle) -> String {
    if flight.departure_city.is_none() && flight.arrival_city.is_none() {
        return String::new();
    }

    if flight.departure_icao.as_deref() == Some(style.home_icao.as_str()) {
        let to = flight.arrival_city.as_deref().unwrap_or("someplace");
        return format!("starting to {to}");
    }
    if flight.arrival_icao.as_deref() == Some(style.home_icao.as_str()) {
        let from = flight.departure_city.as_deref().unwrap_or("somewhere");
        return format!("arriving from {from}");
    }

    let mut words: Vec<String> = vec!["passing by".to_string()];
    if flight.altitude_ft > 1000 {
        let km = (flight.altitude_ft as f64 * FEET_TO_METERS / 1000.0).round() as i64;
        words.push(format!("at {km} kilometers"));
    }
    words.push("on its way".to_string());
    if let Some(from) = flight.departure_city.as_deref() {
        words.push(format!("from {from}"));
    }
    if let Some(to) = flight.arrival_city.as_deref() {
        words.push(format!("to {to}"));
    }
    words.join(" ")
}

fn push_phrase(words: &mut Vec<String>, phrase: &str) {
    if !phrase.is_empty() {
        words.push(phrase.to_string());
    }
}
