//! HTTP API for the SRS pipeline.
//!
//! Exposes template listing, suggestion, generation and validation as JSON
//! endpoints under `/api/v1`. The router is composable: `api_router()`
//! returns a `Router` that can be mounted on any axum server.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{start_server, ServerHandle};
pub use types::ApiContext;
