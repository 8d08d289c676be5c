//! Contact chain domain model.
//!
//! # Responsibility
//! - Define the `Person` → `Company` → `Address` value objects.
//! - Provide the total country derivation with its fallback.
//!
//! # Invariants
//! - All three types are immutable once constructed; there are no mutators.
//! - An absent `company` or `address` link is a valid state, not an error.
//! - `country_name` never fails; unreachable links resolve to the fallback.

use serde::{Deserialize, Serialize};

/// Fallback country text when the person→company→address chain breaks.
pub const COUNTRY_UNKNOWN: &str = "Unknown";

/// Postal address, always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line, e.g. `BigStreet 23`.
    pub street: String,
    /// Numeric postal code.
    pub zip_code: u32,
    pub city: String,
    pub country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        zip_code: u32,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            zip_code,
            city: city.into(),
            country: country.into(),
        }
    }
}

/// Company record. `address = None` means the address is unknown.
///
/// The address is owned by value; two companies never share one `Address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub address: Option<Address>,
}

impl Company {
    pub fn new(name: impl Into<String>, address: Option<Address>) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// Person record. `company = None` means no company on file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub company: Option<Company>,
}

impl Person {
    pub fn new(name: impl Into<String>, company: Option<Company>) -> Self {
        Self {
            name: name.into(),
            company,
        }
    }

    /// Returns the person's address when every chain link is present.
    pub fn address(&self) -> Option<&Address> {
        self.company.as_ref().and_then(|company| company.address.as_ref())
    }

    /// Derives the country through the company address chain.
    ///
    /// # Contract
    /// - Total: any absent link short-circuits to [`COUNTRY_UNKNOWN`].
    /// - Borrows from `self` (or the static fallback); no allocation.
    pub fn country_name(&self) -> &str {
        self.address()
            .map(|address| address.country.as_str())
            .unwrap_or(COUNTRY_UNKNOWN)
    }
}
