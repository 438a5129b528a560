pub mod api;
pub mod app_state;
pub mod assets;
pub mod error;
pub mod events;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    messages::{
        message_list_response::MessageListResponse,
        messages::{api_not_found, api_preflight, list_messages, publish_message},
        publish_response::PublishResponse,
    },
};
pub use app_state::AppState;
pub use assets::{
    asset_error::{AssetError, Result as AssetResult},
    resolve::{content_type_for, resolve_asset_path},
    serve::serve_asset,
};
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;
