//! Export: printable ticket rendering

pub mod ticket;
