//! Application layer: the in-progress weighing session

pub mod session;

pub use session::{SessionState, WeighingSession};
