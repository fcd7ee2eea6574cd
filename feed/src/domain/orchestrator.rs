//! Façade tying the loader, mappers and projector together.

use std::sync::Arc;

use tracing::debug;

use crate::domain::error::FeedError;
use crate::domain::ports::{NetworkRequest, Transport, UserFactory, UserPostsSource};
use crate::domain::snapshot::{Snapshot, SnapshotLoader};
use crate::domain::summary::to_feed_items;
use crate::domain::ui_model::{UiModel, UiProjector};
use crate::domain::user::User;

/// Entry point for one feature's feed pipeline.
///
/// Holds no state between calls; every collaborator is injected.
pub struct DemoOrchestrator<S: ?Sized, T: ?Sized, F: ?Sized> {
    loader: SnapshotLoader<S>,
    transport: Arc<T>,
    factory: Arc<F>,
    projector: UiProjector,
}

impl<S: ?Sized, T: ?Sized, F: ?Sized> DemoOrchestrator<S, T, F> {
    /// Wire an orchestrator from its collaborators.
    pub fn new(
        loader: SnapshotLoader<S>,
        transport: Arc<T>,
        factory: Arc<F>,
        projector: UiProjector,
    ) -> Self {
        Self {
            loader,
            transport,
            factory,
            projector,
        }
    }

    /// Snapshot loader used by [`Self::load`] and [`Self::build_for_user`].
    pub fn loader(&self) -> &SnapshotLoader<S> {
        &self.loader
    }

    /// Projector used for every model this orchestrator builds.
    pub fn projector(&self) -> &UiProjector {
        &self.projector
    }
}

impl<S, T, F> DemoOrchestrator<S, T, F>
where
    S: UserPostsSource + ?Sized,
    T: Transport + ?Sized,
    F: UserFactory + ?Sized,
{
    /// Load a raw snapshot of `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::SourceUnavailable`] when the source fails.
    pub async fn load(&self, user_id: i64) -> Result<Snapshot, FeedError> {
        Ok(self.loader.load(user_id).await?)
    }

    /// Build the feed model for `user_id`.
    ///
    /// An empty snapshot yields [`UiProjector::empty`]. Otherwise the first
    /// user is shown as active with no email, whatever the source reported.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::SourceUnavailable`] when the source fails.
    pub async fn build_for_user(&self, user_id: i64) -> Result<UiModel, FeedError> {
        let snapshot = self.loader.load(user_id).await?;
        let Some(first) = snapshot.first_user() else {
            debug!(user_id, "no user in snapshot");
            return Ok(self.projector.empty());
        };
        let shown = User::new(first.id, first.name.clone(), None, true);
        Ok(self.projector.present(&to_feed_items(&[shown])))
    }

    /// Send an empty `GET` to `path` and report the status code verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] when no response was received.
    pub async fn ping(&self, path: &str) -> Result<u16, FeedError> {
        let response = self.transport.execute(NetworkRequest::get(path)).await?;
        debug!(path, code = response.code, "ping answered");
        Ok(response.code)
    }

    /// Model listing `count` users from the factory, indices `0..count`.
    #[must_use]
    pub fn demo_flow(&self, count: u32) -> UiModel {
        let users: Vec<User> = (0..count)
            .map(|index| self.factory.create_user(index))
            .collect();
        self.projector.present(&to_feed_items(&users))
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
