//! Country domain record and builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{CountryCode, Percent};

/// Fully materialized country record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Unique, immutable key.
    pub code: CountryCode,
    /// Display name.
    pub name: String,
    /// Percentage of the population using the internet, when known.
    pub internet_users: Option<Percent>,
    /// Adult literacy rate as a percentage, when known.
    pub adult_literacy_rate: Option<Percent>,
}

impl Country {
    /// Starts a [`CountryBuilder`] with both percentages absent.
    pub fn builder(code: CountryCode, name: impl Into<String>) -> CountryBuilder {
        CountryBuilder {
            code,
            name: name.into(),
            internet_users: None,
            adult_literacy_rate: None,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Country{{code='{}', name='{}', internet_users={:?}, adult_literacy_rate={:?}}}",
            self.code, self.name, self.internet_users, self.adult_literacy_rate
        )
    }
}

/// Builder for [`Country`].
#[derive(Debug, Clone)]
pub struct CountryBuilder {
    code: CountryCode,
    name: String,
    internet_users: Option<Percent>,
    adult_literacy_rate: Option<Percent>,
}

impl CountryBuilder {
    /// Sets the internet users percentage.
    pub fn internet_users(mut self, value: Option<Percent>) -> Self {
        self.internet_users = value;
        self
    }

    /// Sets the adult literacy rate.
    pub fn adult_literacy_rate(mut self, value: Option<Percent>) -> Self {
        self.adult_literacy_rate = value;
        self
    }

    /// Finishes the record.
    pub fn build(self) -> Country {
        Country {
            code: self.code,
            name: self.name,
            internet_users: self.internet_users,
            adult_literacy_rate: self.adult_literacy_rate,
        }
    }
}

/// Replacement values applied by an edit. The code is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryEdit {
    /// New display name.
    pub name: String,
    /// New internet users percentage.
    pub internet_users: Option<Percent>,
    /// New adult literacy rate.
    pub adult_literacy_rate: Option<Percent>,
}

impl CountryEdit {
    /// Returns `country` with every editable field overwritten.
    pub fn apply_to(self, country: &Country) -> Country {
        Country {
            code: country.code.clone(),
            name: self.name,
            internet_users: self.internet_users,
            adult_literacy_rate: self.adult_literacy_rate,
        }
    }
}
