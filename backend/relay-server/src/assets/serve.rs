use crate::{AppState, AssetError, content_type_for, resolve_asset_path};

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use http::{StatusCode, Uri, header};

/// Fallback handler serving files from the configured static root
pub async fn serve_asset(State(state): State<AppState>, uri: Uri) -> Response {
    let request_path = uri.path();

    let path = match resolve_asset_path(
        &state.static_files.root(),
        &state.static_files.index,
        request_path,
    ) {
        Ok(path) => path,
        Err(e) => return e.into_response(),
    };

    match tokio::fs::read(&path).await {
        Ok(contents) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&path))],
            contents,
        )
            .into_response(),
        Err(e) => AssetError::from_io(request_path, e).into_response(),
    }
}
