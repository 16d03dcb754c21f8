//! Runtime settings: where the state lives and which pins drive the strip.

use std::path::PathBuf;

use tracing::warn;

/// Default location of the state file.
pub const DEFAULT_STATE_PATH: &str = "/usr/local/share/blinkt";

/// BCM pin wired to the strip's data line on a Blinkt!.
pub const DEFAULT_DATA_PIN: u8 = 23;

/// BCM pin wired to the strip's clock line on a Blinkt!.
pub const DEFAULT_CLOCK_PIN: u8 = 24;

/// Environment variable overriding [`Config::state_path`].
pub const STATE_FILE_ENV: &str = "BLINKT_STATE_FILE";

/// Environment variable overriding [`Config::data_pin`].
pub const DATA_PIN_ENV: &str = "BLINKT_DATA_PIN";

/// Environment variable overriding [`Config::clock_pin`].
pub const CLOCK_PIN_ENV: &str = "BLINKT_CLOCK_PIN";

/// Runtime settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// State file read at start and written after a change.
    pub state_path: PathBuf,
    /// BCM number of the data pin.
    pub data_pin: u8,
    /// BCM number of the clock pin.
    pub clock_pin: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            data_pin: DEFAULT_DATA_PIN,
            clock_pin: DEFAULT_CLOCK_PIN,
        }
    }
}

impl Config {
    /// Defaults overridden by the `BLINKT_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name.
    ///
    /// An empty state path or a pin number that does not parse is ignored with a warning.
    ///
    /// ```
    /// use blinkt::config::Config;
    ///
    /// let config = Config::from_lookup(|name| (name == "BLINKT_DATA_PIN").then(|| "17".to_owned()));
    /// assert_eq!(config.data_pin, 17);
    /// assert_eq!(config.clock_pin, 24);
    /// ```
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        match lookup(STATE_FILE_ENV) {
            Some(path) if path.is_empty() => warn!("ignoring empty {STATE_FILE_ENV}"),
            Some(path) => config.state_path = PathBuf::from(path),
            None => {}
        }
        if let Some(pin) = pin_override(&lookup, DATA_PIN_ENV) {
            config.data_pin = pin;
        }
        if let Some(pin) = pin_override(&lookup, CLOCK_PIN_ENV) {
            config.clock_pin = pin;
        }
        config
    }
}

fn pin_override(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<u8> {
    let value = lookup(name)?;
    value
        .trim()
        .parse()
        .inspect_err(|_| warn!("ignoring {name}={value:?}: not a pin number"))
        .ok()
}
