//! Error types for the example-data crate.

use thiserror::Error;

/// Errors that can occur during user generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid display name after maximum retries.
    #[error("failed to generate valid display name for index {index} after {max_attempts} attempts")]
    DisplayNameGenerationFailed {
        /// Position index being generated.
        index: u32,
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}
