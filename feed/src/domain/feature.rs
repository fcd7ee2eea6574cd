//! Feature names and the catalogue that replaces per-feature code copies.
//!
//! Every feature shares the same pipeline; the name only appears in the UI
//! header. A [`FeatureCatalog`] enumerates a contiguous range of numbered
//! features (`Feat476`, `Feat477`, ...) so callers can drive all of them
//! through one loader.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ports::{UserPostsSource, UserPostsSourceError};
use crate::domain::snapshot::SnapshotLoader;

/// Maximum allowed length for a feature name.
pub const FEATURE_NAME_MAX: usize = 64;

/// Prefix used for numbered features.
pub const FEATURE_PREFIX: &str = "Feat";

/// Validation errors returned by [`FeatureName::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureNameValidationError {
    /// The name was empty once trimmed.
    #[error("feature name must not be empty")]
    Empty,
    /// The name exceeded [`FEATURE_NAME_MAX`] characters.
    #[error("feature name must be at most {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// The name contained characters other than ASCII letters, digits or `_`.
    #[error("feature name may only contain ASCII letters, digits, or underscores")]
    InvalidCharacters,
}

/// Label identifying one feature instance of the pipeline.
///
/// ## Invariants
/// - non-empty, no surrounding whitespace;
/// - at most [`FEATURE_NAME_MAX`] characters;
/// - ASCII alphanumeric or `_` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeatureName(String);

impl FeatureName {
    /// Validate and construct a [`FeatureName`].
    pub fn new(name: impl Into<String>) -> Result<Self, FeatureNameValidationError> {
        Self::from_owned(name.into())
    }

    /// Name of the numbered feature `index`, e.g. `Feat476`.
    ///
    /// # Examples
    /// ```
    /// use feed::domain::FeatureName;
    ///
    /// assert_eq!(FeatureName::for_index(476).as_ref(), "Feat476");
    /// ```
    #[must_use]
    pub fn for_index(index: u32) -> Self {
        Self(format!("{FEATURE_PREFIX}{index}"))
    }

    fn from_owned(name: String) -> Result<Self, FeatureNameValidationError> {
        if name.trim().is_empty() {
            return Err(FeatureNameValidationError::Empty);
        }
        if name.chars().count() > FEATURE_NAME_MAX {
            return Err(FeatureNameValidationError::TooLong {
                max: FEATURE_NAME_MAX,
            });
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(FeatureNameValidationError::InvalidCharacters);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for FeatureName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<FeatureName> for String {
    fn from(value: FeatureName) -> Self {
        value.0
    }
}

impl TryFrom<String> for FeatureName {
    type Error = FeatureNameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Checksum of one feature's snapshot, as reported by [`FeatureCatalog::sweep`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSnapshot {
    /// Feature that performed the load.
    pub feature: FeatureName,
    /// Snapshot checksum.
    pub checksum: i32,
    /// Number of posts in the loaded page.
    pub post_count: usize,
}

/// Ordered set of numbered features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureCatalog {
    names: Vec<FeatureName>,
}

impl FeatureCatalog {
    /// Features `Feat<start>` through `Feat<start + count - 1>`.
    ///
    /// The range stops early rather than wrapping past `u32::MAX`.
    #[must_use]
    pub fn range(start: u32, count: u32) -> Self {
        let names = (0..count)
            .map_while(|offset| start.checked_add(offset))
            .map(FeatureName::for_index)
            .collect();
        Self { names }
    }

    /// Catalogue over explicitly named features.
    #[must_use]
    pub fn from_names(names: Vec<FeatureName>) -> Self {
        Self { names }
    }

    /// Feature names in catalogue order.
    #[must_use]
    pub fn names(&self) -> &[FeatureName] {
        &self.names
    }

    /// Number of features in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalogue holds no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Load one snapshot of `user_id` per feature, in catalogue order.
    ///
    /// # Errors
    ///
    /// Returns the first [`UserPostsSourceError`] raised by the source; the
    /// remaining features are not loaded.
    pub async fn sweep<S>(
        &self,
        loader: &SnapshotLoader<S>,
        user_id: i64,
    ) -> Result<Vec<FeatureSnapshot>, UserPostsSourceError>
    where
        S: UserPostsSource + ?Sized,
    {
        let mut reports = Vec::with_capacity(self.names.len());
        for feature in &self.names {
            let snapshot = loader.load(user_id).await?;
            debug!(%feature, checksum = snapshot.checksum, "feature snapshot loaded");
            reports.push(FeatureSnapshot {
                feature: feature.clone(),
                checksum: snapshot.checksum,
                post_count: snapshot.posts.len(),
            });
        }
        Ok(reports)
    }
}
