//! Interpret one command line against the [`Strip`] model.
//!
//! An invocation is an optional selection mask followed by a single directive:
//!
//! ```text
//! blinkt [<selection>] <directive> [<args>...]
//! ```
//!
//! [`Invocation::parse`] turns the tokens into a typed [`Directive`], rejecting bad arguments
//! before anything is touched. [`Invocation::apply`] then mutates the strip and reports whether
//! the result needs to be shown and saved.
//!
//! ```
//! use blinkt::command::{Invocation, Outcome};
//! use blinkt::strip::Strip;
//! # struct NoDelay;
//! # impl embedded_hal::delay::DelayNs for NoDelay { fn delay_ns(&mut self, _: u32) {} }
//!
//! let mut strip = Strip::new();
//! let invocation = Invocation::parse(&["p0", "bright", "31"])?;
//! let outcome = invocation.apply(&mut strip, &mut NoDelay, &mut Vec::new())?;
//!
//! assert_eq!(outcome, Outcome::Changed);
//! assert_eq!(strip.pixels[0].brightness, 31);
//! assert_eq!(strip.pixels[1].brightness, 7);
//! # Ok::<(), blinkt::Error>(())
//! ```

use std::io::Write;

use embedded_hal::delay::DelayNs;
use smart_leds::RGB8;
use tracing::debug;

use crate::colors::named_color;
use crate::number::{is_numeric_token, parse_number};
use crate::state_file::on_off;
use crate::strip::{Flags, MAX_BRIGHTNESS, PIXEL_COUNT, Pixel, Strip};
use crate::{Error, Result, mask, text};

/// Direction for the `rotate` directive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rotation {
    /// Each half of the strip moves one step toward the middle.
    In,
    /// Each half of the strip moves one step toward its end.
    Out,
    /// The whole strip moves one step left.
    Left,
    /// The whole strip moves one step right.
    Right,
}

impl Rotation {
    /// Parse `in`, `out`, `left`, or `right`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRotation`] for anything else.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(Error::UnknownRotation {
                token: token.to_owned(),
            }),
        }
    }
}

/// One parsed directive with its arguments already validated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Directive {
    /// Turn every LED off.
    Off,
    /// Turn LEDs on and end any hold.
    On,
    /// Number pixels from the left.
    Left,
    /// Number pixels from the right.
    Right,
    /// Keep changes off the strip until `show`.
    Hold,
    /// Show held changes.
    Show,
    /// Reset everything except the numbering direction.
    Clear,
    /// Set the brightness of the selected pixels.
    Bright(u8),
    /// Set the color of the selected pixels from `rgb R G B`.
    Rgb(RGB8),
    /// Set the color of the selected pixels from a color name.
    Color(RGB8),
    /// Leave binary mode.
    BinaryOff,
    /// Show a value as an on/off pattern.
    Binary(u8),
    /// Block for a number of milliseconds.
    Delay(u32),
    /// Move pixels, or the binary pattern in binary mode.
    Rotate(Rotation),
    /// Print the current state.
    State,
    /// Print the version.
    Version,
    /// Print usage.
    Help,
    /// Print the man page source.
    ManPage,
    /// Print the license.
    License,
}

impl Directive {
    /// Parse a directive name and the tokens after it. Extra tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is unknown, a required argument is missing, or an argument
    /// is out of range.
    pub fn parse<S: AsRef<str>>(name: &str, args: &[S]) -> Result<Self> {
        let required = |directive: &'static str| {
            arg(args, 0).ok_or(Error::MissingArgument { directive })
        };

        let directive = match name {
            "off" => Self::Off,
            "on" => Self::On,
            "left" => Self::Left,
            "right" => Self::Right,
            "hold" => Self::Hold,
            "show" => Self::Show,
            "clear" => Self::Clear,
            "bright" => {
                let value = parse_number(required("bright")?, 10);
                if value > MAX_BRIGHTNESS {
                    return Err(Error::BrightnessOutOfRange { value });
                }
                Self::Bright(value)
            }
            "rgb" => {
                let channel = |index| arg(args, index).map_or(0, |token| parse_number(token, 10));
                Self::Rgb(RGB8::new(channel(0), channel(1), channel(2)))
            }
            "binary" => match required("binary")? {
                "off" => Self::BinaryOff,
                token => Self::Binary(parse_number(token, 10)),
            },
            "delay" => {
                let token = required("delay")?;
                let msec = token.parse().map_err(|_| Error::InvalidDelay {
                    token: token.to_owned(),
                })?;
                Self::Delay(msec)
            }
            "rotate" => Self::Rotate(Rotation::parse(required("rotate")?)?),
            "state" => Self::State,
            "version" => Self::Version,
            "help" => Self::Help,
            "man-page" => Self::ManPage,
            "license" => Self::License,
            _ => Self::Color(named_color(name).ok_or_else(|| Error::UnknownOption {
                token: name.to_owned(),
            })?),
        };
        Ok(directive)
    }
}

fn arg<S: AsRef<str>>(args: &[S], index: usize) -> Option<&str> {
    args.get(index).map(AsRef::as_ref)
}

/// Whether an applied directive changed the model.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The model changed: show it (unless holding) and save it.
    Changed,
    /// Nothing to show or save.
    Unchanged,
}

/// A selection mask plus a directive, as typed on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Invocation {
    /// The leading selection token, parsed but not yet direction-translated.
    pub selection: Option<u8>,
    /// What to do.
    pub directive: Directive,
}

impl Invocation {
    /// Parse the command-line tokens (without the program name).
    ///
    /// A leading token accepted by [`is_numeric_token`] is the selection mask, read in binary
    /// by default. No directive at all means [`Directive::Help`].
    ///
    /// # Errors
    ///
    /// Returns the error from [`Directive::parse`].
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let (selection, rest) = match args.split_first() {
            Some((first, rest)) if is_numeric_token(first.as_ref()) => {
                (Some(parse_number(first.as_ref(), 2)), rest)
            }
            _ => (None, args),
        };
        let directive = match rest.split_first() {
            Some((name, directive_args)) => Directive::parse(name.as_ref(), directive_args)?,
            None => Directive::Help,
        };
        Ok(Self {
            selection,
            directive,
        })
    }

    /// The selection in physical bit order for the current numbering direction.
    #[must_use]
    pub const fn selection_mask(&self, flags: &Flags) -> u8 {
        match self.selection {
            Some(selection) => mask::to_physical(selection, flags.left_to_right),
            None => mask::ALL_PIXELS,
        }
    }

    /// Apply the directive to `strip`.
    ///
    /// `delay` serves `delay`; `out` receives `state` and the help texts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if `out` cannot be written.
    pub fn apply(
        &self,
        strip: &mut Strip,
        delay: &mut impl DelayNs,
        out: &mut impl Write,
    ) -> Result<Outcome> {
        let selection = self.selection_mask(&strip.flags);
        let flags = &mut strip.flags;
        debug!(directive = ?self.directive, selection, "applying");

        match self.directive {
            Directive::Off => flags.leds_on = false,
            Directive::On => {
                flags.leds_on = true;
                flags.holding = false;
            }
            Directive::Left => flags.left_to_right = true,
            Directive::Right => flags.left_to_right = false,
            Directive::Hold => flags.holding = true,
            Directive::Show => flags.holding = false,
            Directive::Clear => {
                *flags = Flags {
                    left_to_right: flags.left_to_right,
                    ..Flags::DEFAULT
                };
                strip.clear_pixels();
            }
            Directive::Bright(brightness) => {
                for pixel in strip.pixels.selected_mut(selection) {
                    pixel.brightness = brightness;
                }
            }
            Directive::Rgb(color) | Directive::Color(color) => {
                for pixel in strip.pixels.selected_mut(selection) {
                    pixel.color = color;
                }
            }
            Directive::BinaryOff => flags.binary_on = false,
            Directive::Binary(value) => {
                // Unselected pixels are forced lit.
                flags.binary_on = true;
                flags.binary_mask = mask::to_physical(value, flags.left_to_right) | !selection;
            }
            Directive::Delay(msec) => {
                delay.delay_ms(msec);
                return Ok(Outcome::Unchanged);
            }
            Directive::Rotate(rotation) => rotate(strip, rotation),
            Directive::State => {
                write_state(strip, out)?;
                return Ok(Outcome::Unchanged);
            }
            Directive::Version => {
                text::write_version(out)?;
                return Ok(Outcome::Unchanged);
            }
            Directive::Help => {
                text::write_usage(out)?;
                return Ok(Outcome::Unchanged);
            }
            Directive::ManPage => {
                text::write_man_page(out)?;
                return Ok(Outcome::Unchanged);
            }
            Directive::License => {
                text::write_license(out)?;
                return Ok(Outcome::Unchanged);
            }
        }
        Ok(Outcome::Changed)
    }
}

/// Rotate the binary pattern when binary mode is on, otherwise the pixels.
pub fn rotate(strip: &mut Strip, rotation: Rotation) {
    let flags = &mut strip.flags;
    if flags.binary_on {
        flags.binary_mask = match rotation {
            Rotation::In => mask::rotate_in(flags.binary_mask),
            Rotation::Out => mask::rotate_out(flags.binary_mask),
            Rotation::Left => mask::rotate_left(flags.binary_mask),
            Rotation::Right => mask::rotate_right(flags.binary_mask),
        };
    } else {
        rotate_pixels(&mut strip.pixels, rotation, flags.left_to_right);
    }
}

/// Rotate pixel data in place.
///
/// `in` and `out` cycle each half (pixels 0–3 and 4–7) toward or away from the middle.
/// `left` and `right` cycle the whole strip; `left` moves pixel `k` to `k + 1` when numbering
/// right to left and to `k - 1` when numbering left to right.
pub fn rotate_pixels(pixels: &mut [Pixel; PIXEL_COUNT], rotation: Rotation, left_to_right: bool) {
    match rotation {
        Rotation::In => {
            let (low, high) = pixels.split_at_mut(PIXEL_COUNT / 2);
            low.rotate_right(1);
            high.rotate_left(1);
        }
        Rotation::Out => {
            let (low, high) = pixels.split_at_mut(PIXEL_COUNT / 2);
            low.rotate_left(1);
            high.rotate_right(1);
        }
        Rotation::Left | Rotation::Right => {
            if (rotation == Rotation::Left) == left_to_right {
                pixels.rotate_left(1);
            } else {
                pixels.rotate_right(1);
            }
        }
    }
}

/// Print the flags and a table of every pixel.
///
/// # Errors
///
/// Returns [`Error::Io`] if `out` cannot be written.
pub fn write_state(strip: &Strip, out: &mut impl Write) -> Result<()> {
    let flags = &strip.flags;
    let numbering = if flags.left_to_right {
        "left to right"
    } else {
        "right to left"
    };
    writeln!(out, "Numbering: {numbering}")?;
    writeln!(out, "LEDs: {}", on_off(flags.leds_on))?;
    writeln!(out, "Holding: {}", on_off(flags.holding))?;
    writeln!(out, "Binary: {}", on_off(flags.binary_on))?;
    writeln!(out, "Binary mask: {}", flags.binary_mask)?;
    writeln!(out)?;
    writeln!(out, "# brightness red green blue")?;
    for (index, pixel) in strip.pixels.iter().enumerate() {
        let RGB8 { r, g, b } = pixel.color;
        writeln!(
            out,
            "{index}      {:2}    {r:3}  {g:3}  {b:3}",
            pixel.brightness
        )?;
    }
    Ok(())
}
