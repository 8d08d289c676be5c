//! Core domain logic for rolodex.
//! This crate is the single source of truth for contact-chain invariants.

pub mod label;
pub mod logging;
pub mod model;

pub use label::{print_shipping_label, shipping_label, LabelError, LabelResult, ShippingLabel};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Address, Company, Person, COUNTRY_UNKNOWN};
pub use model::name::PersonName;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
