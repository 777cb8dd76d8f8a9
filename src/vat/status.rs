//! Status decision and result assembly.

use tracing::debug;

use super::checklist::checklist_for;
use super::text;
use crate::core::{
    AssessmentMetadata, AssessmentResult, QuizAnswers, RevenueBand, VatStatus, VoluntaryIntent,
};

/// Decide the VAT status from turnover and voluntary intent.
///
/// # Logic
///
/// 1. Revenue at/above the threshold → `Authorized` (intent is irrelevant)
/// 2. Below the threshold, intent `Yes` → `Choice`
/// 3. Below the threshold otherwise → `Exempt`
pub fn determine_status(revenue: RevenueBand, voluntary: VoluntaryIntent) -> VatStatus {
    if !revenue.is_below_threshold() {
        return VatStatus::Authorized;
    }

    match voluntary {
        VoluntaryIntent::Yes => VatStatus::Choice,
        VoluntaryIntent::No | VoluntaryIntent::Unsure => VatStatus::Exempt,
    }
}

/// Classify a set of quiz answers.
///
/// Pure and total: every answer combination yields exactly one status.
pub fn classify(answers: &QuizAnswers) -> AssessmentResult {
    // activity, clients and employees are accepted but do not affect any
    // part of the result yet.
    let QuizAnswers {
        revenue,
        voluntary,
        activity: _,
        clients: _,
        employees: _,
    } = *answers;

    let status = determine_status(revenue, voluntary);
    debug!(
        status = status.code(),
        revenue = revenue.token(),
        voluntary = voluntary.token(),
        "classified VAT status"
    );

    let requires_reports = status == VatStatus::Authorized
        || (status == VatStatus::Choice && voluntary == VoluntaryIntent::Yes);

    AssessmentResult {
        status,
        status_text: text::status_text(status).to_string(),
        explanation: text::explanation(status).to_string(),
        checklist: checklist_for(status),
        metadata: AssessmentMetadata {
            is_voluntary_eligible: revenue.is_below_threshold(),
            requires_bookkeeping: requires_reports,
            requires_vat_reports: requires_reports,
            estimated_time_to_complete: text::estimated_time_to_complete(status).to_string(),
        },
    }
}
