//! Static asset stage.

use std::path::Path;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode, Uri},
    middleware::Next,
    response::Response,
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::model::upload::UPLOAD_PUBLIC_PREFIX;

/// Directories static files are served from.
#[derive(Clone, Debug)]
pub struct StaticAssets {
    public: ServeDir,
    uploads: ServeDir,
}

impl StaticAssets {
    /// Serves `public_dir` at `/` and `upload_dir` at [`UPLOAD_PUBLIC_PREFIX`].
    pub fn new(public_dir: impl AsRef<Path>, upload_dir: impl AsRef<Path>) -> Self {
        Self {
            public: ServeDir::new(public_dir).append_index_html_on_directories(false),
            uploads: ServeDir::new(upload_dir).append_index_html_on_directories(false),
        }
    }

    /// Picks the directory for `path` and the path relative to it.
    fn resolve<'a>(&self, path: &'a str) -> (ServeDir, &'a str) {
        match path
            .strip_prefix(UPLOAD_PUBLIC_PREFIX)
            .filter(|rest| rest.starts_with('/'))
        {
            Some(rest) => (self.uploads.clone(), rest),
            None => (self.public.clone(), path),
        }
    }
}

/// Serves `GET` and `HEAD` requests matching a static file.
///
/// A found file (or a `304 Not Modified` for it) completes the response. Any
/// other outcome falls through to the rest of the pipeline untouched.
pub async fn serve_static(
    State(assets): State<StaticAssets>,
    request: Request,
    next: Next,
) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return next.run(request).await;
    }

    let (dir, path) = assets.resolve(request.uri().path());
    let Ok(uri) = path.parse::<Uri>() else {
        return next.run(request).await;
    };

    let mut lookup = Request::new(Body::empty());
    *lookup.method_mut() = request.method().clone();
    *lookup.uri_mut() = uri;
    *lookup.headers_mut() = request.headers().clone();

    match dir.oneshot(lookup).await {
        Ok(resp) if resp.status().is_success() || resp.status() == StatusCode::NOT_MODIFIED => {
            resp.map(Body::new)
        }
        Ok(_) => next.run(request).await,
        Err(never) => match never {},
    }
}
