//! # pay-api
//!
//! HTTP API layer for paypage-relay-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for payment initiation and status checks
//! - Verbatim relay of gateway responses
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness text |
//! | GET | `/health` | Health check |
//! | POST | `/api/payment` | Initiate a Pay Page payment |
//! | GET | `/api/check/{mtid}` | Check transaction status |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
