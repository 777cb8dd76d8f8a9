//! # biogov
//!
//! VAT dealer status assessment for small Israeli businesses.
//!
//! Five quiz answers go in; a classification comes out — exempt dealer
//! (עוסק פטור), authorized dealer (עוסק מורשה), or exempt-eligible with
//! voluntary registration — together with a Hebrew explanation and an
//! ordered checklist of next steps.
//!
//! All revenue amounts use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use biogov::core::*;
//! use biogov::vat::classify;
//!
//! let answers = QuizAnswersBuilder::new()
//!     .activity(Activity::Freelance)
//!     .revenue(RevenueBand::BelowThreshold)
//!     .clients(ClientBase::Private)
//!     .employees(EmployeeCount::None)
//!     .voluntary(VoluntaryIntent::No)
//!     .build()
//!     .unwrap();
//!
//! let result = classify(&answers);
//! assert_eq!(result.status, VatStatus::Exempt);
//! assert_eq!(result.checklist.len(), 3);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Answer, status, result and checklist types, `Assessment` records |
//! | `vat` (default) | Revenue threshold, status classification, checklists |
//! | `quiz` | JSON validation boundary for raw quiz submissions |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "vat")]
pub mod vat;

#[cfg(feature = "quiz")]
pub mod quiz;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
