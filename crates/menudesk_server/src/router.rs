//! Router assembly and server lifecycle.
//!
//! # Responsibility
//! - Wire REST routes, CORS, and request logging onto one router.
//! - Bind the listener and serve until Ctrl-C.
//!
//! # Invariants
//! - Every request emits one `event=http_request` line with method, path,
//!   status and duration; bodies are never logged.

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;
use axum::extract::Request;
use axum::http::Method;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, patch, post};
use axum::Router;
use log::{error, info};
use std::io;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

/// Builds the REST router over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/menus",
            get(handlers::list_menus).post(handlers::create_menu),
        )
        .route(
            "/menus/{id}",
            get(handlers::get_menu)
                .patch(handlers::update_menu)
                .delete(handlers::delete_menu),
        )
        .route("/menus/{id}/items", post(handlers::create_item))
        .route(
            "/menus/{id}/items/{item_id}",
            patch(handlers::update_item).delete(handlers::delete_item),
        )
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .with_state(state)
}

/// Serves the router on `config.bind_addr()` until Ctrl-C.
pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let addr = config
        .bind_addr()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "event=server_start module=server status=ok addr={} db_path={}",
        addr,
        config.db_path.display()
    );

    axum::serve(listener, build_router(AppState::new(config.db_path)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(
            "event=server_signal module=server status=error error={}",
            err
        );
        std::future::pending::<()>().await;
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;

    info!(
        "event=http_request module=server status=ok method={} path={} http_status={} duration_ms={}",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}
