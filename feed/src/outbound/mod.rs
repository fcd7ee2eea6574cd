//! Outbound adapters implementing the feed's driven ports.
//!
//! - **api**: reqwest-backed JSON API adapters for `UserPostsSource` and
//!   `Transport`.
//! - **example_users**: `UserFactory` backed by the `example-data` generator.
//!
//! Adapters translate between wire formats and domain types. They contain no
//! feed logic.

pub mod api;
pub mod example_users;
