//! Error types for the anytime framework.

use thiserror::Error;

/// Main error type for anytime operations.
///
/// The framework distinguishes programmer errors, which fail fast at
/// construction time, from degenerate-but-valid runtime conditions
/// (empty traces, `NaN` variance at low sample counts), which are
/// ordinary values and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// Error in solver pipeline configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for anytime operations
pub type Result<T> = std::result::Result<T, Error>;
