//! Shared types for Lista Golden
//!
//! Common types used across crates: data models, the unified error
//! system, and request/response DTOs for the benefits API.

pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
