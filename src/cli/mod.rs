pub mod account;
pub mod contact;
pub mod quotation;
pub mod rule;

use serde::Serialize;
use tribu_desk::models::Outcome;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints the outcome message and reports whether it succeeded.
pub fn report(outcome: Outcome) -> bool {
    if outcome.success {
        println!("{}", outcome.message);
    } else {
        eprintln!("{}", outcome.message);
    }
    outcome.success
}
