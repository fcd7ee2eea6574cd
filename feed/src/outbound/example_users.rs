//! `UserFactory` backed by the `example-data` generator.

use example_data::{ExampleUser, ExampleUserGenerator};
use tracing::warn;

use crate::domain::User;
use crate::domain::ports::UserFactory;

/// Factory producing believable, seed-deterministic demo users.
///
/// Generation failures fall back to `User <index>` so the demo flow always
/// yields one user per index.
#[derive(Debug, Clone, Copy)]
pub struct ExampleDataUserFactory {
    generator: ExampleUserGenerator,
}

impl ExampleDataUserFactory {
    /// Factory drawing users from `seed`.
    pub const fn new(seed: u64) -> Self {
        Self {
            generator: ExampleUserGenerator::new(seed),
        }
    }
}

impl UserFactory for ExampleDataUserFactory {
    fn create_user(&self, index: u32) -> User {
        match self.generator.generate(index) {
            Ok(example) => to_user(example),
            Err(error) => {
                warn!(index, %error, "example user generation failed; using placeholder");
                User::new(i64::from(index), format!("User {index}"), None, true)
            }
        }
    }
}

fn to_user(example: ExampleUser) -> User {
    User::new(
        i64::from(example.index),
        example.display_name,
        Some(example.email),
        example.active,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_carry_their_index_as_id() {
        let factory = ExampleDataUserFactory::new(7);
        let user = factory.create_user(5);
        assert_eq!(user.id, 5);
        assert!(user.email.is_some());
    }

    #[test]
    fn same_seed_and_index_yield_same_user() {
        let a = ExampleDataUserFactory::new(7).create_user(2);
        let b = ExampleDataUserFactory::new(7).create_user(2);
        assert_eq!(a, b);
    }

    #[test]
    fn conversion_keeps_generated_fields() {
        let user = to_user(ExampleUser {
            index: 3,
            display_name: "Ada Lovelace".to_owned(),
            email: "ada.lovelace@example.com".to_owned(),
            active: false,
        });
        assert_eq!(
            user,
            User::new(
                3,
                "Ada Lovelace",
                Some("ada.lovelace@example.com".to_owned()),
                false
            )
        );
    }
}
