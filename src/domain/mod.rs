//! Domain layer: models and services

pub mod model;
pub mod service;
