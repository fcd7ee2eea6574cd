//! Generated user type.

use serde::{Deserialize, Serialize};

/// A generated example user.
///
/// # Example
///
/// ```
/// use example_data::ExampleUser;
///
/// let user = ExampleUser {
///     index: 0,
///     display_name: "Ada Lovelace".to_owned(),
///     email: "ada.lovelace@example.com".to_owned(),
///     active: true,
/// };
///
/// assert_eq!(user.display_name, "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUser {
    /// Position index the user was generated for.
    pub index: u32,
    /// Human-readable display name.
    pub display_name: String,
    /// Contact address derived from the display name.
    pub email: String,
    /// Whether the account is active.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_user_serializes_to_camel_case() {
        let user = ExampleUser {
            index: 2,
            display_name: "Test".to_owned(),
            email: "test@example.com".to_owned(),
            active: false,
        };
        let json = serde_json::to_string(&user).expect("serialize");
        assert!(json.contains("displayName"));
        assert!(json.contains("\"index\":2"));
    }
}
