//! Client side of the remote task API.
//!
//! [`TaskApi`] is the seam the rest of the workspace programs against; [`HttpTaskApi`]
//! is the reqwest-backed implementation.

mod config;
pub use config::{ApiConfig, DEFAULT_BASE_URL};

mod error;
pub use error::ApiError;

mod handler;
pub use handler::TaskApi;

mod wire;

mod http;
pub use http::HttpTaskApi;
