use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The attribute a construction step targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Seats,
    Engine,
    TripComputer,
    Gps,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Seats => "seats",
            Attribute::Engine => "engine",
            Attribute::TripComputer => "trip_computer",
            Attribute::Gps => "gps",
        };
        f.write_str(name)
    }
}

// The capability calls and extraction never fail. Everything here comes from
// the layers around them: validation, named lookup and config loading.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Invalid value for attribute '{attribute}': {value:?}")]
    InvalidAttributeValue { attribute: Attribute, value: String },

    #[error("Unknown build sequence: '{0}'")]
    UnknownSequence(String),

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub fn invalid(attribute: Attribute, value: impl ToString) -> Self {
        Self::InvalidAttributeValue {
            attribute,
            value: value.to_string(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for BuildError {
    fn from(err: toml::de::Error) -> Self {
        BuildError::config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
