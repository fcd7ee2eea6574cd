//! Driven port for synthesising demo users.

use crate::domain::user::User;

/// Produces one user per index for the demo flow.
#[cfg_attr(test, mockall::automock)]
pub trait UserFactory: Send + Sync {
    /// Build the user for `index`. Equal indices yield equal users.
    fn create_user(&self, index: u32) -> User;
}

/// Factory yielding `User-<index>`, active for even indices.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserFactory;

impl UserFactory for FixtureUserFactory {
    fn create_user(&self, index: u32) -> User {
        User::new(
            i64::from(index),
            format!("User-{index}"),
            None,
            index % 2 == 0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "User-0", true)]
    #[case(1, "User-1", false)]
    #[case(42, "User-42", true)]
    fn fixture_factory_is_deterministic(
        #[case] index: u32,
        #[case] name: &str,
        #[case] active: bool,
    ) {
        let user = FixtureUserFactory.create_user(index);
        assert_eq!(user, User::new(i64::from(index), name, None, active));
        assert_eq!(user, FixtureUserFactory.create_user(index));
    }
}
