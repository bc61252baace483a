use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Verification succeeded but the payload violates the upstream
    /// contract (e.g. no username). Unlike rejected or unreachable
    /// outcomes this propagates as a hard error.
    #[error("Malformed remote record: {message} {location}")]
    MalformedRecord {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: ams_db::DbError,
        location: ErrorLocation,
    },

    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Password hash error: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP client initialization failed: {message} {location}")]
    ClientInit {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedRecord {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn password_hash<S: Into<String>>(message: S) -> Self {
        Self::PasswordHash {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn client_init<S: Into<String>>(message: S) -> Self {
        Self::ClientInit {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ams_db::DbError> for AuthError {
    #[track_caller]
    fn from(source: ams_db::DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for AuthError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
