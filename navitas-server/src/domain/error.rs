//! Domain error types.
//!
//! These errors represent validation failures when converting parsed
//! reservation tokens into domain values. They are distinct from parse
//! errors, which the parser reports as messages rather than failures.

use super::{
    FareOutOfRange, InvalidAirlineCode, InvalidAirportCode, InvalidBookingReference,
    InvalidCurrencyCode, TimeError,
};

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    Airline(#[from] InvalidAirlineCode),

    #[error(transparent)]
    Airport(#[from] InvalidAirportCode),

    #[error(transparent)]
    Currency(#[from] InvalidCurrencyCode),

    #[error(transparent)]
    Reference(#[from] InvalidBookingReference),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Fare(#[from] FareOutOfRange),

    /// Arrival date would fall outside the representable calendar
    #[error("day offset {0} is out of range")]
    DayOffsetOutOfRange(u32),
}
