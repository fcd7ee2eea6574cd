//! UI models and the projector that builds them.

use serde::{Deserialize, Serialize};

use crate::domain::feature::FeatureName;
use crate::domain::summary::{FeedItem, Summary, position_id, status_label};

/// Header of a model with nothing to show.
pub const EMPTY_HEADER: &str = "No data";
/// Header of a model waiting for data.
pub const LOADING_HEADER: &str = "Loading...";
/// Header of a model describing a failure.
pub const ERROR_HEADER: &str = "Error";

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Row id.
    pub id: i64,
    /// Row title.
    pub title: String,
    /// Row subtitle.
    pub subtitle: String,
    /// Whether the row is highlighted.
    pub selected: bool,
}

/// Render-ready screen state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiModel {
    /// Screen header.
    pub header: String,
    /// Rows in display order.
    pub items: Vec<ListItem>,
    /// Whether a load is in flight.
    pub loading: bool,
    /// Failure message; only set by [`UiProjector::failed`].
    #[serde(default)]
    pub error: Option<String>,
}

impl UiModel {
    fn fixed(header: &str) -> Self {
        Self {
            header: header.to_owned(),
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// List items for raw summaries: id is the position, title the name.
#[must_use]
pub fn summaries_to_list_items(summaries: &[Summary]) -> Vec<ListItem> {
    summaries
        .iter()
        .enumerate()
        .map(|(position, summary)| ListItem {
            id: position_id(position),
            title: summary.name.clone(),
            subtitle: status_label(summary.active).to_owned(),
            selected: summary.active,
        })
        .collect()
}

/// Projects feed items into [`UiModel`]s for one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiProjector {
    feature: FeatureName,
}

impl UiProjector {
    /// Projector labelling headers with `feature`.
    pub fn new(feature: FeatureName) -> Self {
        Self { feature }
    }

    /// Feature used in headers.
    pub fn feature(&self) -> &FeatureName {
        &self.feature
    }

    /// Model listing `items` as `"<n>. <title>"` rows, numbered from 1.
    ///
    /// # Examples
    /// ```
    /// use feed::domain::{FeatureName, UiProjector, User, to_feed_items};
    ///
    /// let projector = UiProjector::new(FeatureName::for_index(476));
    /// let model = projector.present(&to_feed_items(&[User::new(7, "Amy", None, true)]));
    /// assert_eq!(model.header, "Feat476 Feed (1)");
    /// assert_eq!(model.items[0].title, "1. User Amy");
    /// ```
    #[must_use]
    pub fn present(&self, items: &[FeedItem]) -> UiModel {
        let rows = items
            .iter()
            .enumerate()
            .map(|(position, item)| ListItem {
                id: item.id,
                title: format!("{}. {}", position + 1, item.title),
                subtitle: item.subtitle.clone(),
                selected: item.summary.active,
            })
            .collect();
        self.listing(rows)
    }

    /// Model listing raw summaries through [`summaries_to_list_items`].
    #[must_use]
    pub fn present_summaries(&self, summaries: &[Summary]) -> UiModel {
        self.listing(summaries_to_list_items(summaries))
    }

    /// Model for an absent or empty snapshot.
    #[must_use]
    pub fn empty(&self) -> UiModel {
        UiModel::fixed(EMPTY_HEADER)
    }

    /// Model shown while data is loading.
    #[must_use]
    pub fn loading(&self) -> UiModel {
        UiModel {
            loading: true,
            ..UiModel::fixed(LOADING_HEADER)
        }
    }

    /// Model describing a failure.
    #[must_use]
    pub fn failed(&self, message: impl Into<String>) -> UiModel {
        UiModel {
            error: Some(message.into()),
            ..UiModel::fixed(ERROR_HEADER)
        }
    }

    fn listing(&self, items: Vec<ListItem>) -> UiModel {
        UiModel {
            header: format!("{} Feed ({})", self.feature, items.len()),
            items,
            loading: false,
            error: None,
        }
    }
}
