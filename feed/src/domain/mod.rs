//! Domain model and use cases for the feed pipeline.
//!
//! Purpose: turn a user and their posts into checksummed snapshots, feed
//! items and render-ready UI models, independent of any transport.
//!
//! Public surface:
//! - [`SnapshotLoader`] and [`Snapshot`] for fetching.
//! - [`to_summary`], [`to_feed_items`] for mapping.
//! - [`UiProjector`] and [`UiModel`] for presentation.
//! - [`DemoOrchestrator`] tying them together.
//! - [`FeatureCatalog`] for running many named features through one loader.

pub mod bulk;
pub mod checksum;
pub mod error;
pub mod feature;
pub mod orchestrator;
pub mod ports;
pub mod projections;
pub mod snapshot;
pub mod summary;
pub mod ui_model;
pub mod user;

pub use self::bulk::{large_ui_model, many_ui_models, sequential_users};
pub use self::checksum::{CHECKSUM_SEED, RollingChecksum, long_hash, string_hash};
pub use self::error::FeedError;
pub use self::feature::{
    FEATURE_NAME_MAX, FEATURE_PREFIX, FeatureCatalog, FeatureName, FeatureNameValidationError,
    FeatureSnapshot,
};
pub use self::orchestrator::DemoOrchestrator;
pub use self::projections::{
    AnalyticsEvent, StateBlock, UserItem, UserProjection, project_users, ui_text_list,
};
pub use self::snapshot::{DEFAULT_PAGE_SIZE, Snapshot, SnapshotLoader, snapshot_checksum};
pub use self::summary::{FeedItem, Summary, status_label, to_feed_items, to_summaries, to_summary};
pub use self::ui_model::{
    EMPTY_HEADER, ERROR_HEADER, ListItem, LOADING_HEADER, UiModel, UiProjector,
    summaries_to_list_items,
};
pub use self::user::{Post, User};
