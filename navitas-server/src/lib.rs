//! Navitas reservation-text parser and server.
//!
//! Turns airline reservation text pasted by booking agents into structured
//! flight options, and maps those options onto the records the booking
//! application stores.

pub mod components;
pub mod config;
pub mod domain;
pub mod navitas;
pub mod web;
