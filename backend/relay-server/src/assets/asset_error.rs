use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::{StatusCode, header};
use thiserror::Error;

/// Static asset failures. Rendered as plain text, never JSON.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Forbidden asset path: {path} {location}")]
    Forbidden {
        path: String,
        location: ErrorLocation,
    },

    #[error("Asset not found: {path} {location}")]
    NotFound {
        path: String,
        location: ErrorLocation,
    },

    #[error("Failed to read asset {path}: {source} {location}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl AssetError {
    #[track_caller]
    pub fn forbidden(path: &str) -> Self {
        AssetError::Forbidden {
            path: path.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify a read failure
    #[track_caller]
    pub fn from_io(path: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            AssetError::NotFound {
                path: path.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            AssetError::Io {
                path: path.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AssetError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AssetError::NotFound { .. } | AssetError::Io { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        if matches!(self, AssetError::Io { .. }) {
            log::warn!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let status = self.status();
        let text = match status {
            StatusCode::FORBIDDEN => "Forbidden",
            _ => "Not found",
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text,
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
