use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Credential decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid base origin '{origin}': {message} {location}")]
    InvalidOrigin {
        origin: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid page location '{url}': {message} {location}")]
    InvalidLocation {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Session store IO error at {path}: {source} {location}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize session store: {source} {location}")]
    StoreSerialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Creates Decode error at caller location.
    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidOrigin error at caller location.
    #[track_caller]
    pub fn invalid_origin(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOrigin {
            origin: origin.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidLocation error at caller location.
    #[track_caller]
    pub fn invalid_location(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLocation {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates StoreIo error at caller location.
    #[track_caller]
    pub fn store_io(path: PathBuf, source: std::io::Error) -> Self {
        Self::StoreIo {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::StoreSerialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
