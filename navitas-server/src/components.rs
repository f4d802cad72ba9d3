//! Mapping parsed options onto flight-option-component records.
//!
//! The persistence layer stores each segment as a component of a flight
//! option, with 24-hour local times and money in integer cents. This module
//! does that conversion so the parser can keep returning raw tokens and
//! plain decimal fares.

use chrono::{Days, NaiveDate};

use crate::domain::{ClockTime, CurrencyCode, DomainError, parse_travel_date};
use crate::navitas::{NavitasOption, NavitasSegment};

/// Error converting a parsed option into component records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComponentError {
    /// A segment token failed domain validation
    #[error("segment {index}: {source}")]
    Segment { index: usize, source: DomainError },

    /// The fare could not be expressed in cents
    #[error("fare: {0}")]
    Fare(DomainError),
}

/// Lookup key for the flight enrichment service (terminals, gates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentKey {
    pub airline: String,
    pub flight_number: String,
    pub date_raw: String,
}

/// One flight-option-component record.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightComponent {
    pub airline: String,
    pub flight_number: String,
    pub origin_iata: String,
    pub destination_iata: String,

    /// Local departure time, "HH:MM" on a 24-hour clock
    pub departure_time: String,

    /// Local arrival time, "HH:MM" on a 24-hour clock
    pub arrival_time: String,

    pub day_offset: u32,

    /// Only known when a travel year was supplied
    pub departure_date: Option<NaiveDate>,

    /// `departure_date` shifted by `day_offset`
    pub arrival_date: Option<NaiveDate>,

    pub enrichment_key: EnrichmentKey,

    /// Filled in later by the enrichment service, never here
    pub enrichment: Option<serde_json::Value>,
}

/// A flight option ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDraft {
    pub passenger: Option<String>,
    pub reference: Option<String>,
    pub currency: Option<CurrencyCode>,
    pub total_cost_cents: Option<i64>,
    pub components: Vec<FlightComponent>,

    /// Soft line errors from the parse, surfaced as non-blocking warnings
    pub warnings: Vec<String>,
}

impl OptionDraft {
    /// Build a draft from a parsed option.
    ///
    /// `year` resolves the raw date tokens to calendar dates; without it the
    /// component dates are left empty.
    pub fn from_option(option: &NavitasOption, year: Option<i32>) -> Result<Self, ComponentError> {
        let components = option
            .segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                FlightComponent::from_segment(segment, year).map_err(|source| {
                    ComponentError::Segment {
                        index: i + 1,
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total_cost_cents = option
            .fare
            .map(|fare| fare.to_minor_units())
            .transpose()
            .map_err(|e| ComponentError::Fare(e.into()))?;

        Ok(Self {
            passenger: option.passenger.clone(),
            reference: option.reference.map(|r| r.to_string()),
            currency: option.currency(),
            total_cost_cents,
            components,
            warnings: option.errors.clone(),
        })
    }
}

impl FlightComponent {
    /// Convert one parsed segment.
    pub fn from_segment(segment: &NavitasSegment, year: Option<i32>) -> Result<Self, DomainError> {
        let departure_time = ClockTime::parse_meridiem(&segment.dep_time_raw)?;
        let arrival_time = ClockTime::parse_meridiem(&segment.arr_time_raw)?;

        let (departure_date, arrival_date) = match year {
            Some(year) => {
                let departure = parse_travel_date(&segment.date_raw, year)?;
                let arrival = departure
                    .checked_add_days(Days::new(u64::from(segment.day_offset)))
                    .ok_or(DomainError::DayOffsetOutOfRange(segment.day_offset))?;
                (Some(departure), Some(arrival))
            }
            None => (None, None),
        };

        Ok(Self {
            airline: segment.airline.to_string(),
            flight_number: segment.flight_number.clone(),
            origin_iata: segment.origin.to_string(),
            destination_iata: segment.destination.to_string(),
            departure_time: departure_time.to_string(),
            arrival_time: arrival_time.to_string(),
            day_offset: segment.day_offset,
            departure_date,
            arrival_date,
            enrichment_key: EnrichmentKey {
                airline: segment.airline.to_string(),
                flight_number: segment.flight_number.clone(),
                date_raw: segment.date_raw.clone(),
            },
            enrichment: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navitas;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn single_option(text: &str) -> NavitasOption {
        let mut result = navitas::parse(text);
        assert_eq!(result.options.len(), 1, "errors: {:?}", result.errors);
        result.options.remove(0)
    }

    #[test]
    fn draft_from_full_option() {
        let option = single_option(
            "Evan Lodge\n\
             AA 2689 10Aug PHX LAX 10:15A 11:43A\n\
             AA 8453 10Aug LAX HND 2:15P 5:25P +1\n\
             Bag allowance 2PC\n\
             TOTAL FARE INC TAX USD5790.81\n\
             Reference: UCWYOJ",
        );

        let draft = OptionDraft::from_option(&option, Some(2025)).unwrap();
        assert_eq!(draft.passenger.as_deref(), Some("Evan Lodge"));
        assert_eq!(draft.reference.as_deref(), Some("UCWYOJ"));
        assert_eq!(draft.currency.unwrap().as_str(), "USD");
        assert_eq!(draft.total_cost_cents, Some(579081));
        assert_eq!(draft.warnings, vec!["Unrecognized line: \"Bag allowance 2PC\""]);

        let second = &draft.components[1];
        assert_eq!(second.airline, "AA");
        assert_eq!(second.flight_number, "8453");
        assert_eq!(second.origin_iata, "LAX");
        assert_eq!(second.destination_iata, "HND");
        assert_eq!(second.departure_time, "14:15");
        assert_eq!(second.arrival_time, "17:25");
        assert_eq!(second.day_offset, 1);
        assert_eq!(second.departure_date, Some(date(2025, 8, 10)));
        assert_eq!(second.arrival_date, Some(date(2025, 8, 11)));
        assert_eq!(second.enrichment_key.date_raw, "10Aug");
        assert_eq!(second.enrichment, None);
    }

    #[test]
    fn dates_left_empty_without_year() {
        let option = single_option("AA 2689 10Aug PHX LAX 10:15A 11:43A");
        let draft = OptionDraft::from_option(&option, None).unwrap();
        assert_eq!(draft.total_cost_cents, None);
        assert_eq!(draft.components[0].departure_date, None);
        assert_eq!(draft.components[0].arrival_date, None);
    }

    #[test]
    fn offset_crosses_year_end() {
        let option = single_option("NH 5 31Dec HND LAX 11:00P 5:00P +1");
        let draft = OptionDraft::from_option(&option, Some(2025)).unwrap();
        assert_eq!(draft.components[0].arrival_date, Some(date(2026, 1, 1)));
    }

    #[test]
    fn bad_clock_time_names_segment() {
        // The grammar accepts 13:00P, the clock does not
        let option = single_option(
            "AA 2689 10Aug PHX LAX 10:15A 11:43A\nAA 8453 10Aug LAX HND 13:00P 5:25P",
        );
        let err = OptionDraft::from_option(&option, None).unwrap_err();
        assert_eq!(err.to_string(), "segment 2: invalid time: hour must be 1-12");
    }

    #[test]
    fn bad_date_only_fails_with_year() {
        let option = single_option("AA 2689 31Feb PHX LAX 10:15A 11:43A");
        assert!(OptionDraft::from_option(&option, None).is_ok());
        let err = OptionDraft::from_option(&option, Some(2025)).unwrap_err();
        assert!(matches!(err, ComponentError::Segment { index: 1, .. }));
    }
}
