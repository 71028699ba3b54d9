//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health check and the Leptos SSR page under a single Axum router,
//! and serves the compiled WASM/JS/CSS bundle from the site root's `pkg`
//! directory.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Routes that do not depend on Leptos configuration.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application: health check + Leptos SSR page + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(qa_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || qa_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = PathBuf::from(&*leptos_options.site_root).join(&*leptos_options.site_pkg_dir);

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
