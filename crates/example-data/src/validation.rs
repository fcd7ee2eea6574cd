//! Display name validation for generated users.
//!
//! # Validation Rules
//!
//! - Minimum length: 3 characters
//! - Maximum length: 32 characters
//! - Allowed characters: letters (A-Z, a-z), digits (0-9), spaces, underscores
//! - Must not be whitespace-only

/// Minimum allowed length for a display name.
pub const DISPLAY_NAME_MIN: usize = 3;

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 32;

/// Validates a display name.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_display_name;
///
/// assert!(is_valid_display_name("Ada Lovelace"));
/// assert!(is_valid_display_name("user_123"));
/// assert!(!is_valid_display_name("ab"));           // Too short
/// assert!(!is_valid_display_name("O'Brien"));      // Invalid character
/// assert!(!is_valid_display_name("   "));          // Whitespace-only
/// ```
#[must_use]
pub fn is_valid_display_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(DISPLAY_NAME_MIN..=DISPLAY_NAME_MAX).contains(&length) {
        return false;
    }
    if name.trim().is_empty() {
        return false;
    }
    name.chars().all(is_valid_display_name_char)
}

const fn is_valid_display_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '_'
}

/// Replaces characters outside the display name alphabet with underscores.
///
/// Length is not enforced.
#[must_use]
pub(crate) fn sanitize_display_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if is_valid_display_name_char(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Local part of an email address for `display_name`.
///
/// Lowercases and joins whitespace-separated words with `.`.
#[must_use]
pub(crate) fn email_local_part(display_name: &str) -> String {
    display_name
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(".")
}
