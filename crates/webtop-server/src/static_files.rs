//! Static assets for the desktop page.

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use webtop_common::ErrorBody;

use crate::http::Response;

const INDEX_FILE: &str = "index.html";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type by file extension, case-insensitive.
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "txt" => "text/plain; charset=utf-8",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

/// Map a URL path onto `root`. Returns `None` for anything that would
/// escape it.
pub fn resolve(root: &Path, url_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode(url_path)?;
    let mut resolved = root.to_path_buf();
    for component in Path::new(decoded.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

/// Decode `%XX` escapes. Invalid escapes or non-UTF-8 results yield `None`.
fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    if out.contains(&0) {
        return None;
    }
    String::from_utf8(out).ok()
}

fn not_found() -> Response {
    Response::json(404, &ErrorBody::new("not found"))
}

/// Serve `url_path` from `root`. Directories serve their `index.html`.
pub async fn serve(root: &Path, url_path: &str) -> Response {
    let Some(mut path) = resolve(root, url_path) else {
        debug!(path = url_path, "rejected path outside static root");
        return not_found();
    };

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_dir() => path.push(INDEX_FILE),
        Ok(_) => {}
        Err(_) => return not_found(),
    }

    match tokio::fs::read(&path).await {
        Ok(body) => Response::new(200, content_type(&path), body),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "static file unavailable");
            not_found()
        }
    }
}
