//! spotterd - watches the sky around a fixed point and announces each new
//! aircraft at most once.

mod announcer;
mod config;
mod loops;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::announcer::LogAnnouncer;
use crate::config::Config;
use crate::pipeline::Pipeline;
use spotter_feeds::SearchRadius;

/// Announce aircraft flying over the observation point.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Observation latitude (overrides SPOTTER_LAT)
    #[arg(long)]
    lat: Option<f64>,

    /// Observation longitude (overrides SPOTTER_LON)
    #[arg(long)]
    lon: Option<f64>,

    /// Search radius in nautical miles: 1, 5, 10, 25, 100 or 250
    #[arg(long)]
    radius: Option<u16>,

    /// Home airport ICAO for departing/arriving phrasing
    #[arg(long)]
    home: Option<String>,

    /// Seconds between polls
    #[arg(long)]
    interval: Option<u64>,

    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spotter_daemon=debug".parse()?),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(lat) = args.lat {
        config.latitude = lat;
    }
    if let Some(lon) = args.lon {
        config.longitude = lon;
    }
    if let Some(nm) = args.radius {
        config.radius = SearchRadius::from_nm(nm)
            .ok_or_else(|| anyhow::anyhow!("unsupported radius: {} nm", nm))?;
    }
    if let Some(home) = args.home {
        config.home_icao = home;
    }
    if let Some(secs) = args.interval {
        config.poll_interval = std::time::Duration::from_secs(secs);
    }

    if config.rapidapi_key.is_empty() {
        tracing::warn!("SPOTTER_RAPIDAPI_KEY is not set; the feeds will refuse us");
    }

    tracing::info!(
        "watching {:.6},{:.6} within {} nm (home {}, every {:?})",
        config.latitude,
        config.longitude,
        config.radius,
        config.home_icao,
        config.poll_interval,
    );

    let mut pipeline = Pipeline::new(&config);
    let mut announcer = LogAnnouncer;

    if args.once {
        let announced = loops::watch_loop::run_once(&mut pipeline, &config, &mut announcer).await;
        tracing::info!(
            "single cycle done: {} ({} aircraft on the ledger)",
            if announced { "one aircraft announced" } else { "nothing new" },
            pipeline.announced_count(),
        );
        return Ok(());
    }

    loops::watch_loop::run_watch_loop(pipeline, config, &mut announcer).await;
    Ok(())
}
