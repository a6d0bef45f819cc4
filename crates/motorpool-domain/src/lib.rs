//! Vehicle domain model for motorpool
//!
//! A base [`Vehicle`] with bounded speed, specialised by a [`Body`] into a
//! passenger car or a truck. No I/O happens in this crate.

pub mod fleet;
pub mod model;
pub mod service;

pub use fleet::Fleet;
pub use model::*;
