//! Data models
//!
//! Shared between the client and the benefits API (Laravel-style
//! snake_case JSON). All entity IDs are `i64`; the user id is a
//! backend-issued string.

pub mod company;
pub mod key_used;
pub mod membership;
pub mod province;

// Re-exports
pub use company::*;
pub use key_used::*;
pub use membership::*;
pub use province::*;
