//! Domain models

pub mod entry;

pub use entry::Entry;
