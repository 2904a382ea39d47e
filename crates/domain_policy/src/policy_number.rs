//! Policy number format
//!
//! Policy numbers follow `[state]-[year]-[policy id]-[line]`, for example
//! `CA-22-123456-H` for a 2022 California homeowners policy. Only the
//! prefix is checked: characters after the line letter are tolerated.

use std::sync::OnceLock;

use regex::Regex;

static POLICY_NUMBER: OnceLock<Regex> = OnceLock::new();

fn policy_number_pattern() -> &'static Regex {
    POLICY_NUMBER.get_or_init(|| {
        Regex::new(r"^[A-Z]{2}-\d{2}-\d{6}-[AHCFM]").expect("valid regex")
    })
}

/// Returns true if the policy number starts with a well-formed number
pub fn validate_policy_number(policy_number: &str) -> bool {
    policy_number_pattern().is_match(policy_number)
}
