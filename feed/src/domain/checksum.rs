//! Integrity checksums for snapshots, summaries and state blocks.
//!
//! The hashes follow JVM `hashCode` conventions, so stored checksums stay
//! comparable with JVM consumers of the same data:
//!
//! - strings hash as `s[0]*31^(n-1) + ... + s[n-1]` over UTF-16 code units;
//! - 64-bit integers hash as `(v ^ (v >>> 32))` truncated to 32 bits;
//! - every fold is `acc = 31 * acc + field_hash` with two's-complement
//!   wraparound.

const MULTIPLIER: i32 = 31;

/// Initial accumulator value for [`RollingChecksum`].
pub const CHECKSUM_SEED: i32 = 1;

/// Hash a string the way `java.lang.String#hashCode` does.
///
/// # Examples
/// ```
/// use feed::domain::string_hash;
///
/// assert_eq!(string_hash(""), 0);
/// assert_eq!(string_hash("Amy"), 65_965);
/// ```
#[must_use]
pub fn string_hash(value: &str) -> i32 {
    value.encode_utf16().fold(0_i32, |acc, unit| {
        acc.wrapping_mul(MULTIPLIER).wrapping_add(i32::from(unit))
    })
}

/// Hash a 64-bit integer the way `java.lang.Long#hashCode` does.
#[must_use]
pub const fn long_hash(value: i64) -> i32 {
    let bits = value as u64;
    // Keep the low 32 bits of the folded value.
    (bits ^ (bits >> 32)) as u32 as i32
}

/// Polynomial rolling hash with 32-bit wraparound.
///
/// # Examples
/// ```
/// use feed::domain::RollingChecksum;
///
/// let checksum = RollingChecksum::new().fold_long(1).fold_str("Amy");
/// assert_eq!(checksum.value(), 66_957);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollingChecksum(i32);

impl RollingChecksum {
    /// Start a new checksum at [`CHECKSUM_SEED`].
    #[must_use]
    pub const fn new() -> Self {
        Self(CHECKSUM_SEED)
    }

    /// Fold a precomputed field hash into the accumulator.
    #[must_use]
    pub const fn fold(self, field_hash: i32) -> Self {
        Self(self.0.wrapping_mul(MULTIPLIER).wrapping_add(field_hash))
    }

    /// Fold the [`long_hash`] of `value`.
    #[must_use]
    pub const fn fold_long(self, value: i64) -> Self {
        self.fold(long_hash(value))
    }

    /// Fold the [`string_hash`] of `value`.
    #[must_use]
    pub fn fold_str(self, value: &str) -> Self {
        self.fold(string_hash(value))
    }

    /// Current accumulator value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Default for RollingChecksum {
    fn default() -> Self {
        Self::new()
    }
}
