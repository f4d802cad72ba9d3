//! Web layer for the Navitas parser.
//!
//! Provides HTTP endpoints for previewing a paste and turning it into
//! storable flight-option drafts.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
