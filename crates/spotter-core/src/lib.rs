pub mod announce;
pub mod emissions;
pub mod ledger;
pub mod models;
pub mod phrases;
pub mod selector;

pub use announce::{announcement_parts, AnnouncementStyle};
pub use emissions::{co2_tons, DEFAULT_CO2_KG_PER_FLIGHT_KM};
pub use ledger::SeenLedger;
pub use models::{EnrichedFlight, ObservedAircraft, RouteInfo};
pub use phrases::{PhraseGroup, Phrasebook};
pub use selector::{select_nearest, select_new, MIN_AIRBORNE_SPEED_KT};
