//! Basic usage example for validation-ext

use validation_ext::enum_label;
use validation_ext::prelude::*;

enum_label! {
    enum Plan {
        Free,
        Team,
        Enterprise,
    }
}

fn main() {
    // Usernames: letters and digits, underscores allowed
    let username = alphanumeric().ignore_chars("_");

    for input in ["alice_42", "bob!", ""] {
        match username.validate(input) {
            Ok(()) => println!("✓ '{input}' is a valid username"),
            Err(e) => println!("✗ '{input}' is invalid: {e}"),
        }
    }

    // Plans: compared by variant name, ignoring ASCII case
    let plan = one_of(["free", "team"]).ignore_case(true);

    for value in [Plan::Free, Plan::Team, Plan::Enterprise] {
        match plan.validate(value) {
            Ok(()) => println!("✓ {value:?} is an allowed plan"),
            Err(e) => println!("✗ {value:?} is not allowed: {e}"),
        }
    }

    // Null is always valid
    println!("missing username valid: {:?}", username.check(None::<&str>));

    // Applying a check to an unsupported type is a usage error
    match username.validate(42_u16) {
        Ok(()) => println!("unexpected success"),
        Err(CheckError::Unsupported(e)) => println!("usage error: {e}"),
        Err(e) => println!("✗ {e}"),
    }
}
