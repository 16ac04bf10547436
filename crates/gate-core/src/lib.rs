//! Core library for Gate: configuration, logging, and user lookup.

pub mod config;
pub mod logging;
pub mod users;
