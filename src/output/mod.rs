// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Planning is plain data ([`OutputPlan`]); [`deliver`] performs the I/O.

mod clipboard;
mod types;
mod writer;

pub use types::{DeliveryTarget, OutputPlan, OutputReport};
pub use writer::deliver;
