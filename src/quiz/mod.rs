//! JSON boundary for raw quiz submissions.
//!
//! A submission is a flat JSON object with exactly five string fields.
//! It is checked structurally, its tokens are mapped to typed answers,
//! and only then is it classified.
//!
//! # Example
//!
//! ```
//! use biogov::quiz::assess_json;
//! use biogov::core::VatStatus;
//! use serde_json::json;
//!
//! let result = assess_json(&json!({
//!     "activity": "freelance",
//!     "revenue": "500k+",
//!     "clients": "business",
//!     "employees": "1-5",
//!     "voluntary": "no",
//! }))
//! .unwrap();
//! assert_eq!(result.status, VatStatus::Authorized);
//!
//! assert!(assess_json(&json!({ "revenue": "500k+" })).is_err());
//! ```

mod parse;
mod validate;

pub use parse::{assess_json, parse_answers};
pub use validate::{QUIZ_FIELDS, validate_answers};
