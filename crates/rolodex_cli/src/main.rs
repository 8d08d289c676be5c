//! CLI demo entry point.
//!
//! # Responsibility
//! - Exercise the contact chain and label derivation end to end.
//! - Keep output deterministic for quick local sanity checks.

use rolodex_core::{
    default_log_level, init_logging, print_shipping_label, Address, Company, Person, PersonName,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging(default_log_level()) {
        // Logging is diagnostics only; the demo still runs without it.
        eprintln!("logging unavailable: {err}");
    }

    let address = Address::new("BigStreet 23", 1111, "Pittsburgh", "USA");
    let company = Company::new("Acme LTD", Some(address));
    let person = Person::new("Dmitry", Some(company));
    let unemployed = Person::new("Alexey", None);

    println!("{} works in {}", person.name, person.country_name());
    println!("{} works in {}", unemployed.name, unemployed.country_name());

    if let Err(err) = print_shipping_label(&person) {
        eprintln!("shipping label failed: {err}");
        return ExitCode::FAILURE;
    }

    let a = PersonName::new("Dmitry", "Jemerov");
    let b = PersonName::new("Dmitry", "Jemerov");
    println!("same name: {}", a == b);
    println!("name equals number: {}", a.eq_any(&42));

    ExitCode::SUCCESS
}
