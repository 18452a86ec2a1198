//! Core domain + application logic for the Info Lookup Bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the upstream
//! lookup services live behind ports (traits) implemented in adapter crates.

pub mod classify;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod logging;
pub mod messaging;
pub mod ports;
pub mod render;
pub mod report;

pub use errors::{Error, LookupError, Result};
