//! Core assessment types, builders, and records.
//!
//! This module provides the typed quiz answers, the three-way VAT status,
//! and the result shape handed to the HTTP and persistence layers.

mod builder;
mod error;
#[cfg(feature = "vat")]
mod record;
mod types;

pub use builder::*;
pub use error::*;
#[cfg(feature = "vat")]
pub use record::*;
pub use types::*;
