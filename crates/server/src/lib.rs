//! Rolecheck Server - HTTP REST API for role reconciliation
//!
//! Exposes the role matcher and the role suppliers over JSON.
//!
//! # Features
//!
//! - **Authentication**: API key-based authentication with per-key rate limiting
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: `{"error": {"code", "message"}}` bodies with stable codes
//! - **Graceful Shutdown**: SIGTERM and Ctrl+C
//!
//! # API Endpoints
//!
//! ## Public Endpoints (No Authentication)
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//!
//! ## Protected Endpoints (API Key Required)
//!
//! - `POST /api/v1/compare` - Compare PDF roles against XML roles
//! - `POST /api/v1/roles/clean` - Clean a free-form role listing
//! - `POST /api/v1/roles/xml` - Extract roles from an XML document

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
