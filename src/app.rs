//! One full invocation: load the saved state, apply the directive, show it, save it.

use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use tracing::{debug, info};

use crate::Result;
use crate::apa102::Apa102;
use crate::command::{Invocation, Outcome};
use crate::state_file;
use crate::strip::Strip;

/// [`DelayNs`] that blocks the thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Run one command line (without the program name) against the state file at `state_path`.
///
/// The strip starts from defaults and is overwritten by the saved state when there is one.
/// If the directive changes the model, the strip is rendered (unless holding) and the state
/// file rewritten.
///
/// # Errors
///
/// Returns the directive's parse error (nothing is rendered or saved in that case), a pin
/// write failure, or a failure to print or save.
pub fn run<S, D, C>(
    args: &[S],
    state_path: &Path,
    driver: &mut Apa102<D, C>,
    delay: &mut impl DelayNs,
    out: &mut impl Write,
) -> Result<Outcome>
where
    S: AsRef<str>,
    D: OutputPin,
    C: OutputPin,
{
    let mut strip = Strip::new();
    state_file::load_into(state_path, &mut strip);

    let invocation = Invocation::parse(args)?;
    let outcome = invocation.apply(&mut strip, delay, out)?;
    if outcome == Outcome::Unchanged {
        return Ok(outcome);
    }

    if strip.flags.holding {
        info!("holding; strip not updated");
    } else {
        driver.write_strip(&strip)?;
    }
    state_file::save(state_path, &strip)?;
    debug!("invocation complete");
    Ok(outcome)
}
