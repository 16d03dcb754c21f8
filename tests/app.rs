#![allow(missing_docs)]
//! Host-level tests for a whole invocation: load, apply, render, save.

use std::cell::Cell;
use std::convert::Infallible;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use blinkt::apa102::Apa102;
use blinkt::app;
use blinkt::command::Outcome;
use blinkt::gpio::NoopPin;
use blinkt::state_file;
use blinkt::strip::Strip;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Counts rising edges.
struct CountingPin(Rc<Cell<usize>>);

impl ErrorType for CountingPin {
    type Error = Infallible;
}

impl OutputPin for CountingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set(self.0.get() + 1);
        Ok(())
    }
}

fn run(path: &Path, args: &[&str]) -> Result<(Outcome, usize, String), Box<dyn Error>> {
    let pulses = Rc::new(Cell::new(0));
    let mut driver = Apa102::new(NoopPin, CountingPin(Rc::clone(&pulses)))?;
    let mut out = Vec::new();
    let outcome = app::run(args, path, &mut driver, &mut NoDelay, &mut out)?;
    Ok((outcome, pulses.get(), String::from_utf8(out)?))
}

fn saved(path: &Path) -> Result<Strip, Box<dyn Error>> {
    Ok(state_file::read(path)?.ok_or("no state file")?)
}

#[test]
fn change_renders_and_saves() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("blinkt");

    let (outcome, pulses, _) = run(&path, &["green"])?;

    assert_eq!(outcome, Outcome::Changed);
    assert_eq!(pulses, 32 + 8 * 32 + 36);
    assert!(saved(&path)?.pixels.iter().all(|pixel| pixel.color.g == 255));
    Ok(())
}

#[test]
fn state_builds_across_invocations() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("blinkt");

    run(&path, &["right"])?;
    run(&path, &["p0", "bright", "31"])?;

    let strip = saved(&path)?;
    assert!(!strip.flags.left_to_right);
    assert_eq!(strip.pixels[7].brightness, 31);
    assert_eq!(strip.pixels[0].brightness, 7);
    Ok(())
}

#[test]
fn hold_saves_without_rendering() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("blinkt");

    let (_, pulses, _) = run(&path, &["hold"])?;
    assert_eq!(pulses, 0);

    let (_, pulses, _) = run(&path, &["red"])?;
    assert_eq!(pulses, 0);
    assert!(saved(&path)?.flags.holding);

    let (_, pulses, _) = run(&path, &["show"])?;
    assert!(pulses > 0);
    assert!(!saved(&path)?.flags.holding);
    Ok(())
}

#[test]
fn queries_neither_render_nor_save() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("blinkt");

    let (outcome, pulses, text) = run(&path, &["state"])?;

    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(pulses, 0);
    assert!(text.starts_with("Numbering: left to right"));
    assert!(!path.exists());
    Ok(())
}

#[test]
fn errors_leave_the_saved_state_alone() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("blinkt");
    run(&path, &["blue"])?;
    let before = fs::read_to_string(&path)?;

    for args in [&["bright", "99"][..], &["sparkle"], &["rotate"]] {
        assert!(run(&path, args).is_err(), "{args:?}");
    }

    assert_eq!(fs::read_to_string(&path)?, before);
    Ok(())
}

#[test]
fn corrupt_state_file_starts_from_defaults() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("blinkt");
    fs::write(&path, "right\noff\n")?;

    run(&path, &["show"])?;

    assert_eq!(saved(&path)?, Strip::new());
    Ok(())
}

#[test]
fn unwritable_state_file_is_reported() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("no-such-dir").join("blinkt");

    let err = run(&path, &["red"]).err().ok_or("run should fail")?;

    assert!(err.to_string().starts_with("Unable to open"), "{err}");
    Ok(())
}
