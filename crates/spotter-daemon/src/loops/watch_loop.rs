//! Fixed-interval watch loop.
//!
//! One pipeline cycle per tick, strictly sequential: a slow cycle delays the
//! next tick rather than overlapping it.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{interval, Interval, MissedTickBehavior};

use spotter_core::{announcement_parts, AnnouncementStyle, EnrichedFlight, Phrasebook};

use crate::announcer::Announcer;
use crate::config::Config;
use crate::pipeline::Pipeline;

/// Poll the sky forever, announcing each new aircraft once.
pub async fn run_watch_loop<A: Announcer>(
    mut pipeline: Pipeline,
    config: Config,
    announcer: &mut A,
) {
    let style = style_from(&config);
    let phrases = Phrasebook::default();
    let mut rng = StdRng::from_os_rng();
    let mut ticker = poll_ticker(config.poll_interval);

    loop {
        ticker.tick().await;
        if let Some(flight) = pipeline.run_cycle().await {
            announce(&flight, &style, &phrases, &mut rng, announcer);
        }
    }
}

/// Run exactly one cycle, announcing any detection. Returns whether an
/// aircraft was announced; handy for credential smoke tests.
pub async fn run_once<A: Announcer>(
    pipeline: &mut Pipeline,
    config: &Config,
    announcer: &mut A,
) -> bool {
    let style = style_from(config);
    let phrases = Phrasebook::default();
    let mut rng = StdRng::from_os_rng();

    match pipeline.run_cycle().await {
        Some(flight) => {
            announce(&flight, &style, &phrases, &mut rng, announcer);
            true
        }
        None => false,
    }
}

/// Ticker that waits a full interval after a slow cycle instead of firing
/// missed ticks back-to-back.
fn poll_ticker(period: Duration) -> Interval {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

fn style_from(config: &Config) -> AnnouncementStyle {
    AnnouncementStyle {
        home_icao: config.home_icao.clone(),
        cries_per_co2_ton: config.cries_per_co2_ton,
    }
}

fn announce<A: Announcer, R: Rng>(
    flight: &EnrichedFlight,
    style: &AnnouncementStyle,
    phrases: &Phrasebook,
    rng: &mut R,
    announcer: &mut A,
) {
    let parts = announcement_parts(flight, style, phrases, rng);
    announcer.announce(&parts);
}
