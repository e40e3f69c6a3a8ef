//! Landing page and static asset handlers for the client process.

use std::io;
use std::path::Path;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, web};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::{debug, warn};

use crate::inbound::http::state::ClientState;

const INDEX_HTML: &str = include_str!("../../../templates/index.html");

/// Read-only view of the static asset directory.
///
/// Lookups go through a `cap-std` directory handle, so request paths cannot
/// reach outside it.
#[derive(Debug, Default)]
pub struct StaticAssets {
    dir: Option<Dir>,
}

impl StaticAssets {
    /// Open the asset directory; a missing directory serves nothing.
    pub fn open(path: &Path) -> Self {
        match Dir::open_ambient_dir(path, ambient_authority()) {
            Ok(dir) => Self { dir: Some(dir) },
            Err(error) => {
                warn!(path = %path.display(), %error, "static directory unavailable");
                Self::default()
            }
        }
    }

    /// Read an asset by its path relative to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::NotFound`] when no directory is configured,
    /// and propagates lookup failures, including attempts to escape the
    /// directory.
    pub fn read(&self, relative: &str) -> io::Result<Vec<u8>> {
        let dir = self
            .dir
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no static directory"))?;
        if dir.metadata(relative)?.is_dir() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "directory listing disabled"));
        }
        dir.read(relative)
    }
}

fn content_type_for(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Render the landing page.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// Serve a file from the static asset directory.
#[get("/static/{path:.*}")]
pub async fn static_file(state: web::Data<ClientState>, path: web::Path<String>) -> HttpResponse {
    let relative = path.into_inner();
    let assets = state.assets.clone();
    let lookup = relative.clone();
    let result = web::block(move || assets.read(&lookup)).await;
    match result {
        Ok(Ok(bytes)) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, content_type_for(&relative)))
            .body(bytes),
        Ok(Err(error)) => {
            debug!(path = %relative, %error, "static asset not served");
            HttpResponse::NotFound().finish()
        }
        Err(error) => {
            warn!(path = %relative, %error, "static asset lookup aborted");
            HttpResponse::InternalServerError().finish()
        }
    }
}
