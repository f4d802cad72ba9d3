//! Parse error types.
//!
//! The parser never fails as a whole. These types exist so that every
//! message it reports has a single, tested rendering; the parse result
//! stores their `Display` output.

use crate::domain::DomainError;

/// Top-level messages recorded in `ParseResult::errors`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Input was empty, whitespace, or not a string at all
    #[error("Invalid input: expected non-empty string")]
    InvalidInput,

    /// Input had content but no blocks survived splitting
    #[error("No valid option blocks found")]
    NoBlocks,

    /// A block contained no line matching the segment grammar
    #[error("Block {block}: No valid flight segments found")]
    NoSegments { block: usize },

    /// A block failed for an internal reason; other blocks still parse
    #[error("Block {block}: {source}")]
    Block { block: usize, source: BlockFailure },
}

/// Internal failures while parsing a single block.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlockFailure {
    /// The line grammar could not be compiled
    #[error("grammar unavailable: {0}")]
    Grammar(String),

    /// A captured token disagreed with its domain type
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid fare amount: {0}")]
    Amount(String),

    #[error("invalid day offset: {0}")]
    DayOffset(String),
}
