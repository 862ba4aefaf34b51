//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no marketplace endpoints: the browser talks to the hosted
//! backend directly. This router serves the health probe, the compiled
//! `/pkg` assets and hands every other path to Leptos SSR.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Health probe and static assets, independent of Leptos rendering.
pub fn static_routes(site_root: &Path, pkg_dir: &str) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service(&format!("/{pkg_dir}"), ServeDir::new(site_root.join(pkg_dir)))
}

/// Full application router: static routes plus Leptos SSR for the client routes.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = std::path::PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = leptos_options.site_pkg_dir.to_string();

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    static_routes(&site_root, &pkg_dir)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
