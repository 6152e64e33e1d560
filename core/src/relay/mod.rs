//! Relay module - stateless single-hop JSON relay with CORS and a uniform
//! error envelope

pub mod cors;
pub mod error;
pub mod handlers;
pub mod server;
pub mod upstream;

pub use error::RelayError;
pub use handlers::Action;
pub use server::{build_router, AppState, RelayServer};
pub use upstream::UpstreamClient;
