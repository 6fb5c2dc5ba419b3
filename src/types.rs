//! Shared primitive IDs and value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monotonic journal sequence number.
pub type OpSeq = u64;

/// Percentage value in `[0, 100]`.
pub type Percent = f64;

/// Required length of a country code, in characters.
pub const COUNTRY_CODE_LEN: usize = 3;

/// Three-character country identifier used as the record key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

/// Rejected country code text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("country code must be exactly 3 characters, got '{0}'")]
pub struct InvalidCountryCode(pub String);

impl CountryCode {
    /// Trims and upper-cases `raw`, accepting it when it is exactly three
    /// characters long.
    pub fn parse(raw: &str) -> Result<Self, InvalidCountryCode> {
        let trimmed = raw.trim();
        let normalized = trimmed.to_uppercase();
        if normalized.chars().count() != COUNTRY_CODE_LEN {
            return Err(InvalidCountryCode(trimmed.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Borrowed code text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = InvalidCountryCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
