//! PhishGuard Server
//!
//! Web front end for the message scorer: an HTML form at `/`, a JSON API
//! at `/api/analyze`, plus health and Prometheus endpoints.

pub mod cli;
pub mod config;
pub mod page;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use cli::Cli;
pub use config::{ListenConfig, ServerConfig};
pub use routes::create_router;
pub use state::AppState;
