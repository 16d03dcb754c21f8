//! Drive an 8-pixel APA102 LED strip (such as the Pimoroni Blinkt!) one command at a time.
//!
//! Every run of the `blinkt` program loads the saved [`strip::Strip`], applies one
//! [`command::Directive`], re-sends the pixels over two GPIO lines, and saves the result:
//!
//! ```text
//! blinkt red              # every pixel red
//! blinkt p0 bright 31     # pixel 0 at full brightness
//! blinkt binary 5         # show 5 as lit/unlit pixels
//! blinkt rotate left
//! ```
//!
//! # Glossary
//!
//! - **Selection mask:** one bit per pixel choosing which pixels a directive changes.
//! - **Binary mode:** an overlay that lights or darkens each pixel from one bit of a mask.
//! - **Direction transform:** reversing mask bit order when pixels are numbered left to right,
//!   so masks follow the displayed order rather than the wiring.
//! - **Start/end frame:** the APA102 framing around the per-pixel data (32 zero bits before,
//!   36 clock pulses after).

pub mod apa102;
pub mod app;
pub mod colors;
pub mod command;
pub mod config;
mod error;
pub mod gpio;
pub mod mask;
pub mod number;
pub mod state_file;
pub mod strip;
mod text;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
