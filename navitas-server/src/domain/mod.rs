//! Domain types for flight reservations.
//!
//! This module contains the validated value types that parsed reservation
//! text is converted into. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod airline;
mod airport;
mod booking;
mod code;
mod error;
mod money;
mod time;

pub use airline::{AirlineCode, InvalidAirlineCode};
pub use airport::{AirportCode, InvalidAirportCode};
pub use booking::{BookingReference, InvalidBookingReference};
pub use error::DomainError;
pub use money::{CurrencyCode, Fare, FareOutOfRange, InvalidCurrencyCode};
pub use time::{ClockTime, TimeError, parse_travel_date};
