//! [`Config`]-related definitions.

use std::{num::NonZeroUsize, path::PathBuf};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error};
use serde::Deserialize;
use service::layout::MinuteHeight;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Schedule configuration.
    #[serde(default)]
    pub schedule: Schedule,

    /// Layout configuration.
    #[serde(default)]
    pub layout: Layout,

    /// Fetch configuration.
    #[serde(default)]
    pub fetch: Fetch,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }

    /// Builds the [`service::Config`] out of this [`Config`].
    ///
    /// # Errors
    ///
    /// With an [`InvalidMinuteHeight`] if the configured one isn't positive.
    pub fn service(&self) -> Result<service::Config, InvalidMinuteHeight> {
        Ok(service::Config {
            layout: self.layout.try_into()?,
            fetch_concurrency: self.fetch.concurrency,
        })
    }
}

/// Schedule configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Schedule {
    /// Path to the JSON fixture holding the venues and the items.
    #[default(PathBuf::from("fixtures/festival.json"))]
    pub fixture: PathBuf,
}

/// Layout configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Layout {
    /// Length of one minute in the grid.
    #[default(MinuteHeight::DEFAULT.get())]
    pub minute_height: f64,
}

/// Error of a configured minute height not being a positive finite number.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`layout.minute_height` must be positive, got `{_0}`")]
pub struct InvalidMinuteHeight(#[error(not(source))] f64);

impl TryFrom<Layout> for service::layout::Config {
    type Error = InvalidMinuteHeight;

    fn try_from(value: Layout) -> Result<Self, Self::Error> {
        let Layout { minute_height } = value;

        Ok(Self {
            minute_height: MinuteHeight::new(minute_height)
                .ok_or(InvalidMinuteHeight(minute_height))?,
        })
    }
}

/// Fetch configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Fetch {
    /// Maximum number of days fetched concurrently.
    #[default(service::Config::default().fetch_concurrency)]
    pub concurrency: NonZeroUsize,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
