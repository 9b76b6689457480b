//! HTTP clients for the aircraft data sources and the enrichment step that
//! fuses their answers into one record.

pub mod client;
pub mod distance;
pub mod enrich;
pub mod error;
pub mod nearby;
pub mod route;

pub use client::RapidApiClient;
pub use enrich::{enrich_flight, FlightLookup};
pub use error::{FeedError, FeedResult};
pub use nearby::{AdsbClient, SearchRadius, DEFAULT_ADSB_HOST};
pub use route::{AeroDataBoxClient, DEFAULT_AERODATABOX_HOST};
