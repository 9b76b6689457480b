//! Nearest-aircraft selection.

use crate::ledger::SeenLedger;
use crate::models::ObservedAircraft;

/// Ground speed below this is ground vehicles, taxiing traffic or decoder
/// noise, not something flying overhead.
pub const MIN_AIRBORNE_SPEED_KT: f64 = 50.0;

/// Pick the nearest valid airborne aircraft from one poll's records.
///
/// Drops anything on the ground, slower than [`MIN_AIRBORNE_SPEED_KT`] or
/// without a registration. Ties on distance keep the first record seen.
pub fn select_nearest(observed: &[ObservedAircraft]) -> Option<&ObservedAircraft> {
    let mut nearest: Option<&ObservedAircraft> = None;
    for aircraft in observed {
        if aircraft.on_ground
            || aircraft.ground_speed_kt < MIN_AIRBORNE_SPEED_KT
            || aircraft.registration.is_empty()
        {
            continue;
        }
        match nearest {
            Some(best) if aircraft.distance_nm >= best.distance_nm => {}
            _ => nearest = Some(aircraft),
        }
    }
    nearest
}

/// Selection plus dedup in one step: picks the nearest valid aircraft and
/// claims it in the ledger, or returns `None` when nothing new is in range.
pub fn select_new(
    observed: &[ObservedAircraft],
    ledger: &mut SeenLedger,
) -> Option<ObservedAircraft> {
    let nearest = select_nearest(observed)?;
    if ledger.has_seen(&nearest.icao) {
        return None;
    }
    ledger.mark_seen(&nearest.icao);
    Some(nearest.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aircraft(icao: &str, distance_nm: f64) -> ObservedAircraft {
        ObservedAircraft {
            icao: icao.to_string(),
            registration: format!("D-{icao}"),
            type_code: "A320".to_string(),
            callsign: "DLH123".to_string(),
            operator_icao: "DLH".to_string(),
            altitude_ft: 8_000,
            ground_speed_kt: 280.0,
            distance_nm,
            on_ground: false,
        }
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert!(select_nearest(&[]).is_none());
    }

    #[test]
    fn picks_minimum_distance() {
        let observed = vec![aircraft("A", 4.0), aircraft("B", 1.5), aircraft("C", 2.0)];
        let nearest = select_nearest(&observed).unwrap();
        assert_eq!(nearest.icao, "B");
    }

    #[test]
    fn tie_keeps_first_encountered() {
        let observed = vec![aircraft("A", 2.0), aircraft("B", 2.0)];
        let nearest = select_nearest(&observed).unwrap();
        assert_eq!(nearest.icao, "A");
    }

    #[test]
    fn skips_ground_traffic_even_when_nearer() {
        let mut ground = aircraft("GND", 1.0);
        ground.on_ground = true;
        let observed = vec![ground, aircraft("AIR", 3.0)];

        let nearest = select_nearest(&observed).unwrap();
        assert_eq!(nearest.icao, "AIR");
        assert_eq!(nearest.distance_nm, 3.0);
    }

    #[test]
    fn skips_slow_and_unregistered_records() {
        let mut slow = aircraft("SLOW", 0.5);
        slow.ground_speed_kt = 20.0;
        let mut unregistered = aircraft("ANON", 0.8);
        unregistered.registration.clear();
        let observed = vec![slow, unregistered, aircraft("OK", 4.5)];

        let nearest = select_nearest(&observed).unwrap();
        assert_eq!(nearest.icao, "OK");
    }

    #[test]
    fn nothing_survives_filtering() {
        let mut slow = aircraft("SLOW", 0.5);
        slow.ground_speed_kt = 10.0;
        assert!(select_nearest(&[slow]).is_none());
    }

    #[test]
    fn select_new_claims_candidate_once() {
        let mut ledger = SeenLedger::new();
        let observed = vec![aircraft("ABC123", 2.0), aircraft("DEF456", 5.0)];

        let first = select_new(&observed, &mut ledger).unwrap();
        assert_eq!(first.icao, "ABC123");
        assert!(ledger.has_seen("ABC123"));

        // Same nearest aircraft in the next poll: nothing new, and the
        // farther aircraft is not promoted in its place.
        assert!(select_new(&observed, &mut ledger).is_none());
    }
}
