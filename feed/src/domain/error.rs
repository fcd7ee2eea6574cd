//! Errors raised by the feed orchestration layer.

use crate::domain::ports::{TransportError, UserPostsSourceError};

/// Failure of a [`DemoOrchestrator`](crate::domain::DemoOrchestrator) call.
///
/// Port errors pass through unchanged; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    /// The user/posts source failed.
    #[error(transparent)]
    SourceUnavailable(#[from] UserPostsSourceError),
    /// The transport failed before producing a status code.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
