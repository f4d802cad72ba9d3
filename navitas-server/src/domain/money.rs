//! Currency codes and fare amounts.

use super::code::uppercase_code;

uppercase_code!(
    /// A 3-letter ISO 4217 currency code such as "USD" or "EUR".
    ///
    /// Only the shape is checked; the code is not looked up in the ISO table.
    CurrencyCode,
    InvalidCurrencyCode,
    3,
    "currency code"
);

/// Error returned when a fare cannot be expressed in minor units.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("fare {amount} cannot be converted to minor units: {reason}")]
pub struct FareOutOfRange {
    amount: f64,
    reason: &'static str,
}

/// A total fare with its currency.
///
/// The amount is a plain decimal in major units (dollars, euros), exactly as
/// printed in the reservation text. Storage layers that keep money as
/// integer cents must go through [`Fare::to_minor_units`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fare {
    pub amount: f64,
    pub currency: CurrencyCode,
}

impl Fare {
    pub fn new(amount: f64, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Convert the amount to integer minor units (cents), rounding to the
    /// nearest unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use navitas_server::domain::{CurrencyCode, Fare};
    ///
    /// let usd = CurrencyCode::parse("USD").unwrap();
    /// assert_eq!(Fare::new(5790.81, usd).to_minor_units().unwrap(), 579081);
    /// assert_eq!(Fare::new(500.0, usd).to_minor_units().unwrap(), 50000);
    /// ```
    pub fn to_minor_units(&self) -> Result<i64, FareOutOfRange> {
        if !self.amount.is_finite() {
            return Err(FareOutOfRange {
                amount: self.amount,
                reason: "amount is not finite",
            });
        }
        if self.amount < 0.0 {
            return Err(FareOutOfRange {
                amount: self.amount,
                reason: "amount is negative",
            });
        }

        let cents = (self.amount * 100.0).round();
        if cents > i64::MAX as f64 {
            return Err(FareOutOfRange {
                amount: self.amount,
                reason: "amount is too large",
            });
        }

        Ok(cents as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> CurrencyCode {
        CurrencyCode::parse("USD").unwrap()
    }

    #[test]
    fn parse_currency_codes() {
        assert!(CurrencyCode::parse("USD").is_ok());
        assert!(CurrencyCode::parse("JPY").is_ok());
        assert!(CurrencyCode::parse("usd").is_err());
        // Symbols and amounts glued to the code are not codes
        assert!(CurrencyCode::parse("US$").is_err());
        assert_eq!(
            CurrencyCode::parse("USD5790").unwrap_err().to_string(),
            "invalid currency code: must be exactly 3 characters"
        );
    }

    #[test]
    fn currency_display() {
        assert_eq!(usd().to_string(), "USD");
        assert_eq!(format!("{:?}", usd()), "CurrencyCode(USD)");
    }

    #[test]
    fn minor_units_rounds_float_noise() {
        // 0.29 * 100 is 28.999999999999996 in binary floating point
        assert_eq!(Fare::new(0.29, usd()).to_minor_units().unwrap(), 29);
        assert_eq!(Fare::new(450.0, usd()).to_minor_units().unwrap(), 45000);
        assert_eq!(Fare::new(0.0, usd()).to_minor_units().unwrap(), 0);
    }

    #[test]
    fn minor_units_rejects_bad_amounts() {
        assert!(Fare::new(f64::NAN, usd()).to_minor_units().is_err());
        assert!(Fare::new(f64::INFINITY, usd()).to_minor_units().is_err());
        assert!(Fare::new(-1.0, usd()).to_minor_units().is_err());
        assert!(Fare::new(1e30, usd()).to_minor_units().is_err());
    }

    #[test]
    fn fare_error_display() {
        let err = Fare::new(-1.5, usd()).to_minor_units().unwrap_err();
        assert_eq!(
            err.to_string(),
            "fare -1.5 cannot be converted to minor units: amount is negative"
        );
    }
}
