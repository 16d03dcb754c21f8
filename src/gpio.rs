//! Output pin backends for [`Apa102`](crate::apa102::Apa102).
//!
//! - [`NoopPin`] accepts every write and does nothing. It is used on machines without the
//!   strip attached, so the rest of the program (state file included) still works.
//! - With the `rpi` feature, [`open_rpi_pins`] claims the Raspberry Pi GPIO lines through
//!   `rppal`.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

/// A pin that ignores every level change.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoopPin;

impl ErrorType for NoopPin {
    type Error = Infallible;
}

impl OutputPin for NoopPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Claim the data and clock pins (BCM numbering) as outputs, both starting low.
///
/// # Errors
///
/// Returns [`Error::Gpio`](crate::Error::Gpio) if the GPIO peripheral cannot be opened or a
/// pin is already in use.
#[cfg(feature = "rpi")]
pub fn open_rpi_pins(
    data_pin: u8,
    clock_pin: u8,
) -> crate::Result<(rppal::gpio::OutputPin, rppal::gpio::OutputPin)> {
    let gpio = rppal::gpio::Gpio::new()?;
    let data = gpio.get(data_pin)?.into_output_low();
    let clock = gpio.get(clock_pin)?.into_output_low();
    tracing::debug!("claimed GPIO {data_pin} (data) and GPIO {clock_pin} (clock)");
    Ok((data, clock))
}
