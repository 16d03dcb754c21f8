use core::convert::Infallible;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// `bright` was given a value the 5-bit brightness field cannot hold.
    #[display("Brightness must be 0 to 31 (got {value})")]
    BrightnessOutOfRange {
        /// The rejected value.
        value: u8,
    },

    /// A directive that needs an argument was given none.
    #[display("'{directive}' needs an argument")]
    MissingArgument {
        /// Name of the directive.
        directive: &'static str,
    },

    /// Neither a directive nor a named color.
    #[display("Unknown option '{token}'")]
    UnknownOption {
        /// The unrecognized token.
        token: String,
    },

    /// `rotate` was given something other than `in`, `out`, `left`, or `right`.
    #[display("Unknown rotation '{token}' (expected in, out, left, or right)")]
    UnknownRotation {
        /// The unrecognized token.
        token: String,
    },

    /// `delay` was given something that is not a millisecond count.
    #[display("Invalid delay '{token}' (expected milliseconds)")]
    InvalidDelay {
        /// The rejected token.
        token: String,
    },

    /// The state file exists but could not be parsed.
    #[display("State file is malformed: {reason}")]
    MalformedStateFile {
        /// What was missing or wrong.
        reason: &'static str,
    },

    /// The state file could not be written.
    #[display("Unable to open {path} for writing: {source}")]
    StateFileUnwritable {
        /// Where the state file was going.
        path: String,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// Reading the state file, or printing, failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// A GPIO pin refused a level change.
    #[display("Error setting output state")]
    CannotSetOutputState,

    /// The Raspberry Pi GPIO peripheral could not be opened.
    #[cfg(feature = "rpi")]
    #[display("GPIO error: {_0}")]
    Gpio(rppal::gpio::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<Infallible> for Error {
    fn from(_: Infallible) -> Self {
        Self::CannotSetOutputState
    }
}

#[cfg(feature = "rpi")]
impl From<rppal::gpio::Error> for Error {
    fn from(err: rppal::gpio::Error) -> Self {
        Self::Gpio(err)
    }
}
