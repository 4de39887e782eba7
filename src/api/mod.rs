//! REST transport for the clinic records store.
//!
//! Maps HTTP verbs and paths onto the repository functions in `db`.
//! Every route lives under a configurable prefix (`/api` by default);
//! `api_router()` returns a `Router` that can be mounted on any axum
//! server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server, ApiServer, ServerError, ServerSession};
pub use types::ApiContext;
