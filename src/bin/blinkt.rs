//! Command-line entry point: `blinkt [<selection>] <directive> [<args>...]`.
//!
//! Errors are logged to stderr; the exit status is always 0.

use std::io;

use blinkt::apa102::Apa102;
use blinkt::app::{self, StdDelay};
use blinkt::config::Config;
use tracing::error;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BLINKT_LOG";

fn main() {
    init_logging();

    let config = Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args, &config) {
        error!("{err}");
    }
}

fn run(args: &[String], config: &Config) -> blinkt::Result<()> {
    let (data, clock) = open_pins(config)?;
    let mut driver = Apa102::new(data, clock)?;
    let mut stdout = io::stdout().lock();
    app::run(args, &config.state_path, &mut driver, &mut StdDelay, &mut stdout)?;
    Ok(())
}

#[cfg(feature = "rpi")]
fn open_pins(
    config: &Config,
) -> blinkt::Result<(rppal::gpio::OutputPin, rppal::gpio::OutputPin)> {
    blinkt::gpio::open_rpi_pins(config.data_pin, config.clock_pin)
}

#[cfg(not(feature = "rpi"))]
#[expect(
    clippy::unnecessary_wraps,
    reason = "same signature as the rpi backend"
)]
fn open_pins(
    _config: &Config,
) -> blinkt::Result<(blinkt::gpio::NoopPin, blinkt::gpio::NoopPin)> {
    tracing::debug!("built without the rpi feature; pin writes are ignored");
    Ok((blinkt::gpio::NoopPin, blinkt::gpio::NoopPin))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
