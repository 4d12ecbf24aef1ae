//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client uses history-mode routing, so a hard refresh on `/profile` or
//! `/event/42` reaches this server. Anything that is not a built asset is
//! answered with `index.html` and left to the client-side route table and
//! guard. The server makes no authorization decisions of its own.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Health check plus the static client with SPA fallback.
pub fn app(config: &HostConfig) -> Router {
    let index = ServeFile::new(config.index_file());
    let site = ServeDir::new(&config.site_dir)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
