//! Weight Station Library
//!
//! Single-operator weighbridge data entry: first/second weight capture,
//! net and per-40 computation, serial-numbered entry storage, and
//! printable ticket building.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod store;
