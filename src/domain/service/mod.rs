//! Domain services

pub mod validator;
pub mod weight_calculator;

pub use validator::{validate, ValidationPolicy};
