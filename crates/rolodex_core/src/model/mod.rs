//! Domain model for the contact chain and name value types.
//!
//! # Responsibility
//! - Define canonical data structures used by label derivation.
//! - Keep optional relationship links explicit in the type shape.
//!
//! # Invariants
//! - Every domain object is an immutable value; absence of a link is
//!   modeled with `Option`, never with sentinel values.

pub mod contact;
pub mod name;
