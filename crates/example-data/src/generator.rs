//! Deterministic per-index user generation.
//!
//! Each index draws from its own ChaCha stream of the configured seed, so
//! `generate(i)` never depends on which other indices were generated.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::seed::ExampleUser;
use crate::validation::{
    DISPLAY_NAME_MAX, email_local_part, is_valid_display_name, sanitize_display_name,
};

/// Maximum number of attempts to generate a valid display name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Probability numerator of a generated user being active (75%).
const ACTIVE_PROBABILITY_NUMERATOR: u32 = 3;

/// Probability denominator for the active flag.
const ACTIVE_PROBABILITY_DENOMINATOR: u32 = 4;

/// Domain used for generated email addresses.
const EMAIL_DOMAIN: &str = "example.com";

/// Generates example users from a numeric seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleUserGenerator {
    seed: u64,
}

impl ExampleUserGenerator {
    /// Creates a generator for `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates the user at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DisplayNameGenerationFailed`] if no valid
    /// display name was produced within the retry budget.
    pub fn generate(&self, index: u32) -> Result<ExampleUser, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(u64::from(index));

        let display_name = generate_display_name(&mut rng, index)?;
        let email = format!("{}@{EMAIL_DOMAIN}", email_local_part(&display_name));
        let active = rng.random_ratio(ACTIVE_PROBABILITY_NUMERATOR, ACTIVE_PROBABILITY_DENOMINATOR);

        Ok(ExampleUser {
            index,
            display_name,
            email,
            active,
        })
    }

    /// Generates users for indices `0..count`.
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerationError`] encountered.
    pub fn generate_many(&self, count: u32) -> Result<Vec<ExampleUser>, GenerationError> {
        (0..count).map(|index| self.generate(index)).collect()
    }
}

/// Draws first and last names until a valid display name appears.
///
/// Invalid characters are replaced and overlong names truncated before
/// validation.
fn generate_display_name(rng: &mut ChaCha8Rng, index: u32) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);

        let sanitized = sanitize_display_name(&format!("{first} {last}"));
        let truncated: String = sanitized.chars().take(DISPLAY_NAME_MAX).collect();

        if is_valid_display_name(&truncated) {
            return Ok(truncated);
        }
    }

    Err(GenerationError::DisplayNameGenerationFailed {
        index,
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}
