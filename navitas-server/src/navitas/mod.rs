//! Navitas reservation-text parser.
//!
//! Agents paste reservation summaries copied out of a booking system. One
//! paste can hold several itineraries separated by blank lines:
//!
//! ```text
//! Evan Lodge
//! AA 2689 10Aug PHX LAX  10:15A 11:43A
//! AA 8453 10Aug LAX HND  2:15P 5:25P +1
//! TOTAL FARE INC TAX  USD5790.81
//! Reference: UCWYOJ
//! ```
//!
//! [`parse`] turns each block into a [`NavitasOption`]. Malformed lines
//! never abort the parse; they are reported alongside the data that did
//! parse.

mod aliases;
mod error;
mod grammar;
mod parser;
mod types;


pub use aliases::{normalize_airline, normalize_flight_number};
pub use error::{BlockFailure, ParseError};
pub use parser::{parse, parse_value};
pub use types::{NavitasOption, NavitasSegment, ParseResult, SOURCE};
