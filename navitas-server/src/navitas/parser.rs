//! Block-by-block Navitas parsing.

use tracing::{debug, trace};

use crate::domain::{
    AirlineCode, AirportCode, BookingReference, CurrencyCode, DomainError, Fare,
};

use super::aliases::{normalize_airline, normalize_flight_number};
use super::error::{BlockFailure, ParseError};
use super::grammar::{Grammar, Line, SegmentTokens};
use super::types::{NavitasOption, NavitasSegment, ParseResult};

/// Parse pasted Navitas reservation text.
///
/// The input is split into option blocks at blank lines; each block is
/// parsed independently. This never fails: empty input, blocks without
/// segments and internal failures are reported in [`ParseResult::errors`],
/// and lines that match no grammar are reported on their option.
///
/// # Examples
///
/// ```
/// use navitas_server::navitas;
///
/// let result = navitas::parse(
///     "Evan Lodge\nAA 2689 10Aug PHX LAX 10:15A 11:43A\nReference: UCWYOJ",
/// );
/// assert!(result.errors.is_empty());
/// let option = &result.options[0];
/// assert_eq!(option.passenger.as_deref(), Some("Evan Lodge"));
/// assert_eq!(option.segments[0].origin.as_str(), "PHX");
/// ```
pub fn parse(input: &str) -> ParseResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParseResult::failed(ParseError::InvalidInput);
    }

    let grammar = Grammar::get();

    let mut blocks = match grammar {
        Ok(grammar) => grammar.split_blocks(trimmed),
        Err(_) => Vec::new(),
    };
    // No separators found (or no grammar to find them): one block
    if blocks.is_empty() {
        blocks.push(trimmed);
    }
    if blocks.iter().all(|b| b.trim().is_empty()) {
        return ParseResult::failed(ParseError::NoBlocks);
    }

    let mut result = ParseResult::default();
    for (i, raw) in blocks.into_iter().enumerate() {
        let block = i + 1;
        let outcome = grammar
            .map_err(|e| BlockFailure::Grammar(e.to_string()))
            .and_then(|grammar| parse_block(grammar, raw));

        match outcome {
            Ok(option) if option.segments.is_empty() => {
                debug!(block, "navitas block has no segments");
                result.push_error(ParseError::NoSegments { block });
            }
            Ok(option) => {
                debug!(
                    block,
                    segments = option.segments.len(),
                    soft_errors = option.errors.len(),
                    "parsed navitas block"
                );
                result.options.push(option);
            }
            Err(source) => {
                debug!(block, error = %source, "navitas block failed");
                result.push_error(ParseError::Block { block, source });
            }
        }
    }

    result
}

/// Parse untyped input, as received from a JSON body.
///
/// Anything other than a JSON string is reported as invalid input.
pub fn parse_value(value: &serde_json::Value) -> ParseResult {
    match value.as_str() {
        Some(text) => parse(text),
        None => ParseResult::failed(ParseError::InvalidInput),
    }
}

fn parse_block(grammar: &Grammar, raw: &str) -> Result<NavitasOption, BlockFailure> {
    let mut option = NavitasOption::empty(raw);

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let kind = grammar.classify(line, option.passenger.is_none());
        trace!(line, ?kind, "classified line");

        match kind {
            Line::Passenger(name) => option.passenger = Some(name.to_string()),
            Line::Segment(tokens) => option.segments.push(build_segment(tokens)?),
            Line::Fare { currency, amount } => option.fare = Some(build_fare(currency, amount)?),
            Line::Reference(code) => {
                option.reference = Some(BookingReference::parse(code).map_err(DomainError::from)?)
            }
            Line::Unrecognized => option
                .errors
                .push(format!("Unrecognized line: \"{}\"", line)),
        }
    }

    Ok(option)
}

fn build_segment(tokens: SegmentTokens<'_>) -> Result<NavitasSegment, BlockFailure> {
    let airline =
        AirlineCode::parse(normalize_airline(tokens.airline)).map_err(DomainError::from)?;
    let origin = AirportCode::parse(tokens.origin).map_err(DomainError::from)?;
    let destination = AirportCode::parse(tokens.destination).map_err(DomainError::from)?;

    let day_offset = match tokens.day_offset {
        Some(n) => n
            .parse::<u32>()
            .map_err(|_| BlockFailure::DayOffset(n.to_string()))?,
        None => 0,
    };

    Ok(NavitasSegment {
        airline,
        flight_number: normalize_flight_number(tokens.flight_number).to_string(),
        date_raw: tokens.date.to_string(),
        origin,
        destination,
        dep_time_raw: tokens.dep_time.to_string(),
        arr_time_raw: tokens.arr_time.to_string(),
        day_offset,
    })
}

fn build_fare(currency: &str, amount: &str) -> Result<Fare, BlockFailure> {
    let currency = CurrencyCode::parse(currency).map_err(DomainError::from)?;
    let amount = amount
        .parse::<f64>()
        .map_err(|_| BlockFailure::Amount(amount.to_string()))?;
    Ok(Fare::new(amount, currency))
}
