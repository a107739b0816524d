//! # feed-api
//!
//! REST API server built with Axum framework.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the pieces integration tests and the binary drive
pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
