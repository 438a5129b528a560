use crate::{AssetError, AssetResult};

use std::path::{Component, Path, PathBuf};

/// Map a request path onto a file below `root`.
///
/// `/` maps to `index`. Only plain path segments are accepted; `..`, `.`,
/// roots and prefixes are rejected outright rather than normalized.
pub fn resolve_asset_path(root: &Path, index: &str, request_path: &str) -> AssetResult<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    let relative = if relative.is_empty() { index } else { relative };

    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => resolved.push(segment),
            _ => return Err(AssetError::forbidden(request_path)),
        }
    }

    Ok(resolved)
}

/// Content type by file extension
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "text/plain; charset=utf-8",
    }
}
