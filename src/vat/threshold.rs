//! Exempt dealer (עוסק פטור) turnover threshold.
//!
//! A business whose annual turnover stays below ₪120,000 may operate as an
//! exempt dealer. At or above it, registration as an authorized dealer is
//! mandatory.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::RevenueBand;

/// Annual turnover threshold for exempt dealer status, in ILS.
pub const REVENUE_THRESHOLD: Decimal = dec!(120_000);

/// Lower bound of the quiz's highest revenue bucket, in ILS.
pub const HIGH_REVENUE_BOUNDARY: Decimal = dec!(500_000);

impl RevenueBand {
    /// Bucket an annual turnover amount (ILS, before VAT).
    ///
    /// Exactly [`REVENUE_THRESHOLD`] counts as at/above the threshold.
    pub fn from_annual_revenue(revenue: Decimal) -> Self {
        if revenue < REVENUE_THRESHOLD {
            Self::BelowThreshold
        } else if revenue < HIGH_REVENUE_BOUNDARY {
            Self::MidRange
        } else {
            Self::High
        }
    }
}
