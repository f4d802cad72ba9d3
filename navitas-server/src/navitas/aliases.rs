//! Carrier alias normalization.
//!
//! Some reservation systems spell out carrier codes and flight numbers
//! letter-by-letter ("BATWO", "EIGHTZEROZERO"). The tables here cover the
//! tokens that have turned up in real pastes. They are deliberately closed:
//! an unknown spelled token is passed through verbatim and logged, never
//! decoded digit-by-digit.

use tracing::warn;

/// Spelled-out airline tokens and their canonical carrier codes.
const AIRLINE_ALIASES: &[(&str, &str)] = &[("BATWO", "BA")];

/// Spelled-out flight numbers and their numeric form.
const FLIGHT_NUMBER_ALIASES: &[(&str, &str)] = &[
    ("EIGHTZEROZERO", "800"),
    ("FOURFIVETHREE", "453"),
    ("FOURONETWO", "412"),
    ("SEVENFIVE", "75"),
];

fn lookup(table: &[(&str, &'static str)], token: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, canonical)| *canonical)
}

/// Map an airline token to its canonical carrier code.
///
/// Tokens not in the alias table are returned unchanged.
pub fn normalize_airline(token: &str) -> &str {
    lookup(AIRLINE_ALIASES, token).unwrap_or(token)
}

/// Map a flight number token to its canonical form.
///
/// Tokens not in the alias table are returned unchanged. A purely alphabetic
/// token that misses the table is almost certainly a spelled-out number we do
/// not know yet, so it is logged for follow-up.
pub fn normalize_flight_number(token: &str) -> &str {
    match lookup(FLIGHT_NUMBER_ALIASES, token) {
        Some(canonical) => canonical,
        None => {
            if token.bytes().all(|b| b.is_ascii_alphabetic()) {
                warn!(token, "unknown spelled-out flight number, keeping verbatim");
            }
            token
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalization is a pure function of the token
        #[test]
        fn deterministic(token in "[A-Z0-9]{1,14}") {
            prop_assert_eq!(normalize_flight_number(&token), normalize_flight_number(&token));
            prop_assert_eq!(normalize_airline(&token), normalize_airline(&token));
        }

        /// Numeric flight numbers are never rewritten
        #[test]
        fn digits_unchanged(token in "[0-9]{1,4}") {
            prop_assert_eq!(normalize_flight_number(&token), token.as_str());
        }
    }
}
