//! Persistable assessment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{AssessmentResult, QuizAnswers};
use crate::vat::classify;

/// A completed assessment: the submitted answers and the result computed
/// from them. Immutable once created; the data layer stores it keyed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    id: Uuid,
    created_at: DateTime<Utc>,
    answers: QuizAnswers,
    result: AssessmentResult,
}

impl Assessment {
    /// Classify `answers` and wrap the result in a new record with a fresh id.
    pub fn new(answers: QuizAnswers) -> Self {
        let result = classify(&answers);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            answers,
            result,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn result(&self) -> &AssessmentResult {
        &self.result
    }

    /// Relative URL of the shareable result page.
    pub fn share_path(&self) -> String {
        format!("/results/{}", self.id)
    }
}
