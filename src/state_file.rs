//! Persist a [`Strip`] between invocations as a small text file.
//!
//! The layout is line oriented:
//!
//! ```text
//! left            <- "left" or "right"
//! on              <- LEDs on/off
//! off             <- holding on/off
//! off             <- binary on/off
//! 255             <- binary mask, decimal
//! 7 0 0 0         <- brightness blue green red, one line per pixel (8 lines)
//! ```
//!
//! A file that cannot be parsed is never partially applied: [`load_into`] resets the strip to
//! its defaults instead.

use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use smart_leds::RGB8;
use tracing::{debug, warn};

use crate::strip::{Flags, Pixel, Pixels, Strip};
use crate::{Error, Result};

const FLAG_LINE_COUNT: usize = 4;
const FIELDS_PER_PIXEL: usize = 4;

/// Read the state file at `path`.
///
/// Returns `Ok(None)` if there is no file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file exists but cannot be read, and
/// [`Error::MalformedStateFile`] if its contents are incomplete or invalid.
pub fn read(path: &Path) -> Result<Option<Strip>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no state file at {}", path.display());
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    parse_text(&text).map(Some)
}

/// Overwrite `strip` with the saved state at `path`, if any.
///
/// A missing file leaves `strip` as it is. A file that exists but cannot be read or parsed is
/// reported and `strip` is reset with [`Strip::init_defaults`].
pub fn load_into(path: &Path, strip: &mut Strip) {
    match read(path) {
        Ok(Some(saved)) => *strip = saved,
        Ok(None) => {}
        Err(err) => {
            warn!("Error reading file {}: {err}", path.display());
            strip.init_defaults();
        }
    }
}

/// Write `strip` to `path`, replacing any previous contents.
///
/// # Errors
///
/// Returns [`Error::StateFileUnwritable`] if the file cannot be written. Nothing is retried.
pub fn save(path: &Path, strip: &Strip) -> Result<()> {
    fs::write(path, format_text(strip)).map_err(|source| Error::StateFileUnwritable {
        path: path.display().to_string(),
        source,
    })?;
    debug!("saved state to {}", path.display());
    Ok(())
}

/// Parse the text of a state file.
///
/// # Errors
///
/// Returns [`Error::MalformedStateFile`] if a line or number is missing, or a number is not
/// in `0..=255`. Anything after the last pixel is ignored.
pub fn parse_text(text: &str) -> Result<Strip> {
    let mut lines = text.split_inclusive('\n');
    let mut flag_lines = [""; FLAG_LINE_COUNT];
    for slot in &mut flag_lines {
        *slot = lines.next().ok_or(Error::MalformedStateFile {
            reason: "missing flag line",
        })?;
    }
    let [direction, leds_on, holding, binary_on] = flag_lines;

    let mut numbers = lines.flat_map(str::split_whitespace).map(parse_byte);
    let mut next_byte = || {
        numbers.next().unwrap_or_else(|| {
            Err(Error::MalformedStateFile {
                reason: "missing number",
            })
        })
    };

    let flags = Flags {
        left_to_right: direction == "left\n",
        leds_on: leds_on == "on\n",
        holding: holding == "on\n",
        binary_on: binary_on == "on\n",
        binary_mask: next_byte()?,
    };

    let mut pixels = Pixels::new();
    for pixel in pixels.iter_mut() {
        let fields: [u8; FIELDS_PER_PIXEL] = [next_byte()?, next_byte()?, next_byte()?, next_byte()?];
        let [brightness, blue, green, red] = fields;
        *pixel = Pixel::new(brightness, RGB8::new(red, green, blue));
    }

    Ok(Strip { flags, pixels })
}

/// Render `strip` as the text of a state file.
#[must_use]
pub fn format_text(strip: &Strip) -> String {
    let flags = &strip.flags;
    let mut text = String::new();
    let _ = writeln!(text, "{}", if flags.left_to_right { "left" } else { "right" });
    for flag in [flags.leds_on, flags.holding, flags.binary_on] {
        let _ = writeln!(text, "{}", on_off(flag));
    }
    let _ = writeln!(text, "{}", flags.binary_mask);
    for pixel in strip.pixels.iter() {
        let RGB8 { r, g, b } = pixel.color;
        let _ = writeln!(text, "{} {b} {g} {r}", pixel.brightness);
    }
    text
}

pub(crate) const fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn parse_byte(field: &str) -> Result<u8> {
    field.parse().map_err(|_| Error::MalformedStateFile {
        reason: "number is not in 0..=255",
    })
}
