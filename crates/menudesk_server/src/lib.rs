//! HTTP surface for menudesk.
//!
//! # Responsibility
//! - Expose menu and menu item operations as JSON REST endpoints.
//! - Translate core errors into HTTP status codes and error bodies.
//!
//! # Invariants
//! - Handlers hold no business rules; every decision lives in
//!   `menudesk_core`.
//! - Core calls never run on async worker threads.

pub mod config;
pub mod dto;
pub mod error;
mod handlers;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::{build_router, run_server};
pub use state::AppState;
