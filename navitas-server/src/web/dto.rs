//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase to match what the front end already consumes.

use serde::{Deserialize, Serialize};

use crate::components::{EnrichmentKey, FlightComponent, OptionDraft};
use crate::navitas::{NavitasOption, NavitasSegment, ParseResult};

/// Request to parse a paste.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Pasted text. Left untyped so that a missing or non-string value
    /// reaches the parser and is reported as invalid input.
    #[serde(default)]
    pub text: serde_json::Value,
}

/// Request to turn a paste into option drafts.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub text: serde_json::Value,

    /// Travel year used to resolve "10Aug"-style dates
    pub year: Option<i32>,
}

/// A parsed flight segment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResult {
    pub airline: String,
    pub flight_number: String,
    pub date_raw: String,
    pub origin: String,
    pub destination: String,
    pub dep_time_raw: String,
    pub arr_time_raw: String,
    pub day_offset: u32,
}

impl SegmentResult {
    pub fn from_segment(segment: &NavitasSegment) -> Self {
        Self {
            airline: segment.airline.to_string(),
            flight_number: segment.flight_number.clone(),
            date_raw: segment.date_raw.clone(),
            origin: segment.origin.to_string(),
            destination: segment.destination.to_string(),
            dep_time_raw: segment.dep_time_raw.clone(),
            arr_time_raw: segment.arr_time_raw.clone(),
            day_offset: segment.day_offset,
        }
    }
}

/// A parsed option block.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionResult {
    pub passenger: Option<String>,
    pub total_fare: Option<f64>,
    pub currency: Option<String>,
    pub reference: Option<String>,
    pub segments: Vec<SegmentResult>,
    pub source: &'static str,
    pub raw: String,
    pub errors: Vec<String>,
}

impl OptionResult {
    pub fn from_option(option: &NavitasOption) -> Self {
        Self {
            passenger: option.passenger.clone(),
            total_fare: option.total_fare(),
            currency: option.currency().map(|c| c.to_string()),
            reference: option.reference.map(|r| r.to_string()),
            segments: option
                .segments
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            source: option.source(),
            raw: option.raw.clone(),
            errors: option.errors.clone(),
        }
    }
}

/// Response for a parse.
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub options: Vec<OptionResult>,
    pub errors: Vec<String>,
}

impl ParseResponse {
    pub fn from_result(result: &ParseResult) -> Self {
        Self {
            options: result.options.iter().map(OptionResult::from_option).collect(),
            errors: result.errors.clone(),
        }
    }
}

/// Lookup key for terminal and gate enrichment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentKeyResult {
    pub airline: String,
    pub flight_number: String,
    pub date_raw: String,
}

impl EnrichmentKeyResult {
    pub fn from_key(key: &EnrichmentKey) -> Self {
        Self {
            airline: key.airline.clone(),
            flight_number: key.flight_number.clone(),
            date_raw: key.date_raw.clone(),
        }
    }
}

/// A flight-option-component record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentResult {
    pub airline: String,
    pub flight_number: String,
    pub origin_iata: String,
    pub destination_iata: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub day_offset: u32,

    /// ISO date (YYYY-MM-DD), present when a year was supplied
    pub departure_date: Option<String>,
    pub arrival_date: Option<String>,

    pub enrichment_key: EnrichmentKeyResult,
    pub enrichment: Option<serde_json::Value>,
}

impl ComponentResult {
    pub fn from_component(component: &FlightComponent) -> Self {
        Self {
            airline: component.airline.clone(),
            flight_number: component.flight_number.clone(),
            origin_iata: component.origin_iata.clone(),
            destination_iata: component.destination_iata.clone(),
            departure_time: component.departure_time.clone(),
            arrival_time: component.arrival_time.clone(),
            day_offset: component.day_offset,
            departure_date: component.departure_date.map(|d| d.to_string()),
            arrival_date: component.arrival_date.map(|d| d.to_string()),
            enrichment_key: EnrichmentKeyResult::from_key(&component.enrichment_key),
            enrichment: component.enrichment.clone(),
        }
    }
}

/// A storable flight option.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResult {
    pub passenger: Option<String>,
    pub reference: Option<String>,
    pub currency: Option<String>,

    /// Total fare in minor units (cents)
    pub total_cost_cents: Option<i64>,

    pub components: Vec<ComponentResult>,
    pub warnings: Vec<String>,
}

impl DraftResult {
    pub fn from_draft(draft: &OptionDraft) -> Self {
        Self {
            passenger: draft.passenger.clone(),
            reference: draft.reference.clone(),
            currency: draft.currency.map(|c| c.to_string()),
            total_cost_cents: draft.total_cost_cents,
            components: draft
                .components
                .iter()
                .map(ComponentResult::from_component)
                .collect(),
            warnings: draft.warnings.clone(),
        }
    }
}

/// Response for an import.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub drafts: Vec<DraftResult>,
    pub errors: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
