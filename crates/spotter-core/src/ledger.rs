//! Process-lifetime record of announced aircraft.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Insert-only set of aircraft already announced, keyed by transponder hex.
/// No eviction and no expiry: once seen, an airframe stays quiet for the
/// rest of the process lifetime. Memory only; resets on restart.
#[derive(Debug, Default)]
pub struct SeenLedger {
    seen: HashMap<String, DateTime<Utc>>,
}

impl SeenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_seen(&self, icao: &str) -> bool {
        self.seen.contains_key(icao)
    }

    /// Record an aircraft as announced. Idempotent; the first timestamp wins.
    pub fn mark_seen(&mut self, icao: &str) {
        self.seen
            .entry(icao.to_string())
            .or_insert_with(Utc::now);
    }

    /// When the aircraft was first announced, if ever.
    pub fn first_seen_at(&self, icao: &str) -> Option<DateTime<Utc>> {
        self.seen.get(icao).copied()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_until_marked() {
        let mut ledger = SeenLedger::new();
        assert!(!ledger.has_seen("ABC123"));

        ledger.mark_seen("ABC123");
        assert!(ledger.has_seen("ABC123"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn mark_seen_is_idempotent() {
        let mut ledger = SeenLedger::new();
        ledger.mark_seen("ABC123");
        let first = ledger.first_seen_at("ABC123").unwrap();

        ledger.mark_seen("ABC123");
        ledger.mark_seen("ABC123");

        assert!(ledger.has_seen("ABC123"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.first_seen_at("ABC123"), Some(first));
    }

    #[test]
    fn tracks_ids_independently() {
        let mut ledger = SeenLedger::new();
        ledger.mark_seen("ABC123");
        assert!(!ledger.has_seen("DEF456"));
        assert!(ledger.first_seen_at("DEF456").is_none());
    }
}
