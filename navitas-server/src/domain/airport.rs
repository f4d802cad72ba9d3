//! Airport code types.

use super::code::uppercase_code;

uppercase_code!(
    /// A 3-letter IATA airport code such as "PHX" or "HND".
    ///
    /// Only the shape is checked. Reservation systems print codes in upper
    /// case, so a lowercase "lax" is treated as noise rather than folded.
    ///
    /// # Examples
    ///
    /// ```
    /// use navitas_server::domain::AirportCode;
    ///
    /// let lax = AirportCode::parse("LAX").unwrap();
    /// assert_eq!(lax.as_str(), "LAX");
    /// assert!(AirportCode::parse("lax").is_err());
    /// ```
    AirportCode,
    InvalidAirportCode,
    3,
    "airport code"
);
