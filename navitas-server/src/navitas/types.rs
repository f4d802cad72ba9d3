//! Parsed Navitas option types.

use crate::domain::{AirlineCode, AirportCode, BookingReference, CurrencyCode, Fare};

use super::error::ParseError;

/// Origin format tag carried by every parsed option.
pub const SOURCE: &str = "navitas";

/// One flight leg within an option.
///
/// Date and time tokens are kept exactly as printed; interpreting them
/// (which year, which timezone) is the consumer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavitasSegment {
    /// Carrier code after alias normalization ("BATWO" becomes "BA")
    pub airline: AirlineCode,

    /// Flight number after alias normalization ("EIGHTZEROZERO" becomes "800")
    pub flight_number: String,

    /// Raw date token, e.g. "10Aug"
    pub date_raw: String,

    pub origin: AirportCode,

    pub destination: AirportCode,

    /// Raw departure time, e.g. "10:15A"
    pub dep_time_raw: String,

    /// Raw arrival time, e.g. "5:25P"
    pub arr_time_raw: String,

    /// Days between departure and arrival (the "+N" suffix), 0 if absent
    pub day_offset: u32,
}

/// One passenger's itinerary block.
#[derive(Debug, Clone, PartialEq)]
pub struct NavitasOption {
    /// First "Firstname Lastname" line in the block, if any
    pub passenger: Option<String>,

    /// Total fare and its currency, always captured together
    pub fare: Option<Fare>,

    pub reference: Option<BookingReference>,

    /// Segments in source line order
    pub segments: Vec<NavitasSegment>,

    /// The block text exactly as it was split from the input
    pub raw: String,

    /// One message per line that matched no grammar
    pub errors: Vec<String>,
}

impl NavitasOption {
    pub(crate) fn empty(raw: &str) -> Self {
        Self {
            passenger: None,
            fare: None,
            reference: None,
            segments: Vec::new(),
            raw: raw.to_string(),
            errors: Vec::new(),
        }
    }

    /// The format this option was parsed from. Always [`SOURCE`].
    pub fn source(&self) -> &'static str {
        SOURCE
    }

    /// Total fare amount in major units.
    pub fn total_fare(&self) -> Option<f64> {
        self.fare.map(|f| f.amount)
    }

    pub fn currency(&self) -> Option<CurrencyCode> {
        self.fare.map(|f| f.currency)
    }
}

/// Output of a parse call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseResult {
    /// Segment-bearing options in block order
    pub options: Vec<NavitasOption>,

    /// Block-level and input-level failures in encounter order
    pub errors: Vec<String>,
}

impl ParseResult {
    pub(crate) fn failed(err: ParseError) -> Self {
        Self {
            options: Vec::new(),
            errors: vec![err.to_string()],
        }
    }

    pub(crate) fn push_error(&mut self, err: ParseError) {
        self.errors.push(err.to_string());
    }
}
