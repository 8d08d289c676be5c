//! Shipping label derivation.
//!
//! # Responsibility
//! - Resolve a person's address chain into a printable two-line label.
//! - Keep the hard precondition failure separate from the total
//!   `country_name` fallback on the model.
//!
//! # Invariants
//! - A label is rendered fully or not at all; the failure path emits
//!   nothing.
//! - Line order and spacing are fixed: street line, then
//!   `"<zip> <city> <country>"` with single spaces.

use crate::model::contact::Person;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LabelResult<T> = Result<T, LabelError>;

/// Error for label derivation over an incomplete contact chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The person has no company, or the company has no address.
    NoAddress,
}

impl Display for LabelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAddress => write!(f, "No address"),
        }
    }
}

impl Error for LabelError {}

/// Rendered shipping label, one field per output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingLabel {
    street_line: String,
    locality_line: String,
}

impl ShippingLabel {
    /// Returns the label lines in print order.
    pub fn lines(&self) -> [&str; 2] {
        [self.street_line.as_str(), self.locality_line.as_str()]
    }
}

impl Display for ShippingLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.street_line)?;
        write!(f, "{}", self.locality_line)
    }
}

/// Renders a shipping label from the person's address chain.
///
/// # Errors
/// - [`LabelError::NoAddress`] when the company or its address is absent.
///   This is a precondition failure, not a fallback case.
pub fn shipping_label(person: &Person) -> LabelResult<ShippingLabel> {
    let address = person.address().ok_or(LabelError::NoAddress)?;
    debug!(
        "event=label_render status=ok zip={} country={}",
        address.zip_code, address.country
    );
    Ok(ShippingLabel {
        street_line: address.street.clone(),
        locality_line: format!("{} {} {}", address.zip_code, address.city, address.country),
    })
}

/// Renders and writes a shipping label to stdout.
///
/// # Errors
/// - Propagates [`LabelError::NoAddress`] before anything is written.
pub fn print_shipping_label(person: &Person) -> LabelResult<()> {
    let label = shipping_label(person)?;
    println!("{label}");
    Ok(())
}
