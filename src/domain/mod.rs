//! Domain types for Veil
//!
//! The domain layer provides:
//! - **Error types** ([`VeilError`])
//! - **Result type alias** ([`Result`])
//!
//! All fallible core operations return [`Result<T, VeilError>`]; the CLI
//! layer wraps them in `anyhow` for user-facing context.

pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::VeilError;
pub use result::Result;
