//! Airline carrier code type.

use std::fmt;

/// Error returned when parsing an invalid airline code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airline code: {reason}")]
pub struct InvalidAirlineCode {
    reason: &'static str,
}

/// A carrier code as it appears in reservation text.
///
/// Usually the 2-letter IATA designator ("AA", "BA"), but reservation
/// systems sometimes print longer carrier tokens, so anything from 2 to 5
/// uppercase ASCII letters is accepted.
///
/// # Examples
///
/// ```
/// use navitas_server::domain::AirlineCode;
///
/// let aa = AirlineCode::parse("AA").unwrap();
/// assert_eq!(aa.as_str(), "AA");
///
/// assert!(AirlineCode::parse("aa").is_err());
/// assert!(AirlineCode::parse("A").is_err());
/// assert!(AirlineCode::parse("ABCDEF").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AirlineCode(String);

impl AirlineCode {
    /// Parse an airline code from a string.
    ///
    /// The input must be 2 to 5 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirlineCode> {
        if !(2..=5).contains(&s.len()) {
            return Err(InvalidAirlineCode {
                reason: "must be 2 to 5 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(InvalidAirlineCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(AirlineCode(s.to_string()))
    }

    /// Returns the airline code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirlineCode({})", self.0)
    }
}

impl fmt::Display for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
