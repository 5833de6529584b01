//! Terminal demo for the tour carousel.
//!
//! Loads the featured feed from the configured content source on a background
//! loader thread, mounts the carousel in a [`SimulatedHost`], and prints a
//! text frame after every autoplay step.
//!
//! # Usage
//!
//! ```text
//! tour-carousel [CONFIG.toml] [SECONDS]
//! ```
//!
//! `SECONDS` is virtual time to simulate (default 10). Configuration comes
//! from the optional TOML file plus `TOUR_CAROUSEL_*` environment variables;
//! see the library docs for keys.
//!
//! # Event Flow
//!
//! 1. `Event::Mounted` makes the carousel emit a featured-tours `Load`
//! 2. The demo forwards every queued load to the loader thread
//! 3. Responses come back as `Event::Content` and rebuild the carousel
//! 4. Virtual time advances in autoplay-sized steps, rendering after each

use std::path::PathBuf;
use std::time::Duration;
use tour_carousel::carousel::Event;
use tour_carousel::loader::ContentLoader;
use tour_carousel::observability::init_tracing;
use tour_carousel::runtime::SimulatedHost;
use tour_carousel::ui::render;
use tour_carousel::{initialize, CarouselError, Config, Result};

const RENDER_COLS: usize = 72;
const DEFAULT_SECONDS: u64 = 10;
const LOAD_TIMEOUT: Duration = Duration::from_secs(30);

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let seconds = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| CarouselError::Config(format!("invalid SECONDS '{raw}': {e}")))?,
        None => DEFAULT_SECONDS,
    };

    let config = Config::load(config_path.as_deref())?;
    init_tracing(&config);
    tracing::info!(source = ?config.content.source, base_url = %config.cms.base_url, "starting demo");

    let loader = ContentLoader::from_config(&config)?.spawn();
    let mut host = SimulatedHost::new(initialize(&config), config.host_options());

    host.dispatch(Event::Mounted)?;
    drain_loads(&mut host, &loader)?;
    println!("{}\n", render(&host.state, RENDER_COLS));

    let step = host.state.options.autoplay_interval;
    let end = Duration::from_secs(seconds);
    while host.now() < end {
        host.advance(step.min(end - host.now()))?;
        drain_loads(&mut host, &loader)?;
        println!(
            "t={:>6}ms  item {}/{}",
            host.now().as_millis(),
            host.state.logical_index + 1,
            host.state.item_count()
        );
        println!("{}\n", render(&host.state, RENDER_COLS));
    }

    tracing::info!(renders = host.render_count(), "demo finished");
    Ok(())
}

/// Sends queued load requests to the loader and waits for their answers.
fn drain_loads(host: &mut SimulatedHost, loader: &tour_carousel::loader::LoaderHandle) -> Result<()> {
    loop {
        let requests = host.take_loads();
        if requests.is_empty() {
            return Ok(());
        }
        let expected = requests.len();
        for request in requests {
            loader.send(request)?;
        }
        for _ in 0..expected {
            match loader.recv_timeout(LOAD_TIMEOUT)? {
                Some(response) => host.deliver(response)?,
                None => {
                    return Err(CarouselError::Loader("timed out waiting for content".to_string()));
                }
            }
        }
    }
}
