//! VAT dealer status classification.
//!
//! Maps quiz answers to exempt / authorized / choice, picks the Hebrew
//! explanation, and builds the next-step checklist for the status.
//!
//! # Example
//!
//! ```
//! use biogov::core::*;
//! use biogov::vat::*;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(RevenueBand::from_annual_revenue(dec!(119_999)), RevenueBand::BelowThreshold);
//! assert_eq!(RevenueBand::from_annual_revenue(dec!(120_000)), RevenueBand::MidRange);
//!
//! assert_eq!(
//!     determine_status(RevenueBand::BelowThreshold, VoluntaryIntent::Yes),
//!     VatStatus::Choice,
//! );
//! ```

mod checklist;
mod status;
mod text;
mod threshold;

pub use checklist::checklist_for;
pub use status::{classify, determine_status};
pub use text::{estimated_time_to_complete, explanation, status_text};
pub use threshold::{HIGH_REVENUE_BOUNDARY, REVENUE_THRESHOLD};
