//! Deterministic example user generation for feed demos.
//!
//! Users are derived from a numeric seed and a position index: the same
//! `(seed, index)` pair always yields the same user, independently of which
//! other indices were generated. The crate knows nothing about the feed
//! domain; callers convert [`ExampleUser`] values at the point of use.
//!
//! # Example
//!
//! ```
//! use example_data::ExampleUserGenerator;
//!
//! let generator = ExampleUserGenerator::new(42);
//! let users = generator.generate_many(3).expect("generation succeeds");
//!
//! assert_eq!(users.len(), 3);
//! assert_eq!(users[1], generator.generate(1).expect("generation succeeds"));
//! ```

mod error;
mod generator;
mod seed;
mod validation;

pub use error::GenerationError;
pub use generator::ExampleUserGenerator;
pub use seed::ExampleUser;
pub use validation::{DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, is_valid_display_name};
