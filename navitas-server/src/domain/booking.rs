//! Booking reference (record locator) type.

use std::fmt;

/// Error returned when parsing an invalid booking reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid booking reference: {reason}")]
pub struct InvalidBookingReference {
    reason: &'static str,
}

/// A 6-character alphanumeric booking reference (PNR record locator).
///
/// Callers treat the reference as an opaque identifier, so the source
/// casing is preserved rather than normalized.
///
/// # Examples
///
/// ```
/// use navitas_server::domain::BookingReference;
///
/// let r = BookingReference::parse("UCWYOJ").unwrap();
/// assert_eq!(r.as_str(), "UCWYOJ");
///
/// assert!(BookingReference::parse("ABC12").is_err());
/// assert!(BookingReference::parse("ABC-12").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingReference([u8; 6]);

impl BookingReference {
    /// Parse a booking reference: exactly 6 ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidBookingReference> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidBookingReference {
                reason: "must be exactly 6 characters",
            });
        }

        if !bytes.iter().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidBookingReference {
                reason: "must be ASCII letters or digits",
            });
        }

        let mut code = [0u8; 6];
        code.copy_from_slice(bytes);
        Ok(BookingReference(code))
    }

    /// Returns the reference as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII alphanumerics
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookingReference({})", self.as_str())
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
