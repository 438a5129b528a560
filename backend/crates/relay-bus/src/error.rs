use relay_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BusError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Malformed payload: {message} {location}")]
    MalformedPayload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Subscription {subscriber_id} closed {location}")]
    SubscriptionClosed {
        subscriber_id: String,
        location: ErrorLocation,
    },

    #[error("Invalid bus configuration: {message} {location}")]
    InvalidConfig {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for BusError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => BusError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::MalformedPayload { message, .. } => BusError::MalformedPayload {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidCapacity { capacity, .. } => BusError::InvalidConfig {
                message: format!("history capacity must be at least 1, got {capacity}"),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, BusError>;
