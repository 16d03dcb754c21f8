//! A device abstraction for the two-wire APA102 protocol used by the Blinkt! strip.
//!
//! Each render sends:
//!
//! 1. a start frame of 32 zero bits,
//! 2. one 32-bit frame per pixel in physical order: control byte, blue, green, red,
//! 3. an end frame of 36 clock pulses with data held low.
//!
//! The control byte is `0b111` followed by the 5-bit brightness. Bytes go out
//! most-significant bit first, one clock pulse per bit. The data pin is only written when its
//! level changes, so long runs of equal bits cost clock pulses alone.
//!
//! The driver works with any [`embedded_hal::digital::OutputPin`]; see [`crate::gpio`] for
//! the backends this crate provides.

use embedded_hal::digital::{OutputPin, PinState};
use tracing::debug;

use crate::mask;
use crate::strip::{MAX_BRIGHTNESS, PIXEL_COUNT, Strip};
use crate::{Error, Result};

/// Control byte with the brightness field at zero.
pub const CONTROL_OFF: u8 = 0b1110_0000;

/// Bytes in one pixel frame.
pub const BYTES_PER_PIXEL: usize = 4;

/// Zero bits in the start frame.
pub const START_FRAME_CLOCKS: usize = 32;

/// Clock pulses in the end frame.
pub const END_FRAME_CLOCKS: usize = 36;

/// Control byte for pixel `index`, honoring the on/off and binary overlay flags.
#[must_use]
pub fn control_byte(strip: &Strip, index: usize) -> u8 {
    let flags = &strip.flags;
    let lit = flags.leds_on && (!flags.binary_on || mask::is_set(flags.binary_mask, index));
    match strip.pixels.get(index) {
        Some(pixel) if lit => CONTROL_OFF | (pixel.brightness & MAX_BRIGHTNESS),
        _ => CONTROL_OFF,
    }
}

/// The pixel frames of a render, without the start and end frames.
///
/// ```
/// use blinkt::apa102::encode_frames;
/// use blinkt::strip::Strip;
/// use smart_leds::RGB8;
///
/// let mut strip = Strip::new();
/// strip.pixels[0].color = RGB8::new(1, 2, 3);
///
/// let frames = encode_frames(&strip);
/// assert_eq!(frames[..4], [0b1110_0111, 3, 2, 1]);
/// ```
#[must_use]
pub fn encode_frames(strip: &Strip) -> [u8; PIXEL_COUNT * BYTES_PER_PIXEL] {
    let mut bytes = [0; PIXEL_COUNT * BYTES_PER_PIXEL];
    for (index, (frame, pixel)) in bytes
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(strip.pixels.iter())
        .enumerate()
    {
        frame.copy_from_slice(&[
            control_byte(strip, index),
            pixel.color.b,
            pixel.color.g,
            pixel.color.r,
        ]);
    }
    bytes
}

/// Bit-banged APA102 driver over a data pin and a clock pin.
///
/// The driver remembers the last level it put on the data pin so that repeated bits do not
/// rewrite it.
pub struct Apa102<D, C> {
    data: D,
    clock: C,
    data_level: PinState,
}

impl<D, C> Apa102<D, C>
where
    D: OutputPin,
    C: OutputPin,
{
    /// Take ownership of the pins and drive both low.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin cannot be driven.
    pub fn new(mut data: D, mut clock: C) -> Result<Self> {
        data.set_low().map_err(|_| Error::CannotSetOutputState)?;
        clock.set_low().map_err(|_| Error::CannotSetOutputState)?;
        Ok(Self {
            data,
            clock,
            data_level: PinState::Low,
        })
    }

    /// Send the whole strip: start frame, eight pixel frames, end frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin write fails part way through.
    pub fn write_strip(&mut self, strip: &Strip) -> Result<()> {
        self.send_clocks(START_FRAME_CLOCKS)?;
        for byte in encode_frames(strip) {
            self.send_byte(byte)?;
        }
        self.send_clocks(END_FRAME_CLOCKS)?;
        debug!("wrote {PIXEL_COUNT} pixels");
        Ok(())
    }

    /// Send one byte, most-significant bit first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin write fails.
    pub fn send_byte(&mut self, byte: u8) -> Result<()> {
        for bit in (0..8).rev() {
            self.set_data(PinState::from(byte & (1 << bit) != 0))?;
            self.pulse_clock()?;
        }
        Ok(())
    }

    /// Pulse the clock `count` times with data held low.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin write fails.
    pub fn send_clocks(&mut self, count: usize) -> Result<()> {
        self.set_data(PinState::Low)?;
        for _ in 0..count {
            self.pulse_clock()?;
        }
        Ok(())
    }

    /// Give the pins back.
    pub fn release(self) -> (D, C) {
        (self.data, self.clock)
    }

    fn set_data(&mut self, level: PinState) -> Result<()> {
        if level != self.data_level {
            self.data
                .set_state(level)
                .map_err(|_| Error::CannotSetOutputState)?;
            self.data_level = level;
        }
        Ok(())
    }

    fn pulse_clock(&mut self) -> Result<()> {
        self.clock
            .set_high()
            .map_err(|_| Error::CannotSetOutputState)?;
        self.clock.set_low().map_err(|_| Error::CannotSetOutputState)
    }
}
