use serde::{Deserialize, Serialize};

/// The five answers of the VAT status quiz.
///
/// Only `revenue` and `voluntary` drive the classification today.
/// `activity`, `clients` and `employees` are collected and persisted with
/// the assessment but do not yet influence status, checklist or metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizAnswers {
    /// Legal form of the business activity.
    pub activity: Activity,
    /// Expected annual turnover bucket.
    pub revenue: RevenueBand,
    /// Who the business sells to.
    pub clients: ClientBase,
    /// Number of employees.
    pub employees: EmployeeCount,
    /// Intent to register as authorized dealer even if exempt-eligible.
    pub voluntary: VoluntaryIntent,
}

/// Business activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    /// Self-employed individual (עצמאי).
    #[serde(rename = "freelance")]
    Freelance,
    /// Limited company (חברה בע"מ).
    #[serde(rename = "company")]
    Company,
    /// Non-profit (עמותה).
    #[serde(rename = "ngo")]
    Ngo,
    #[serde(rename = "other")]
    Other,
}

impl Activity {
    /// Quiz token as sent by the client.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Freelance => "freelance",
            Self::Company => "company",
            Self::Ngo => "ngo",
            Self::Other => "other",
        }
    }

    /// Parse from a quiz token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "freelance" => Some(Self::Freelance),
            "company" => Some(Self::Company),
            "ngo" => Some(Self::Ngo),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Annual turnover bucket offered by the quiz.
///
/// Classification only needs [`RevenueBand::is_below_threshold`]; the
/// middle and high buckets both mean mandatory registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevenueBand {
    /// Below ₪120,000 per year.
    #[serde(rename = "under 120k")]
    BelowThreshold,
    /// ₪120,000 up to ₪500,000 per year.
    #[serde(rename = "120k-500k")]
    MidRange,
    /// ₪500,000 per year or more.
    #[serde(rename = "500k+")]
    High,
}

impl RevenueBand {
    /// Quiz token as sent by the client.
    pub fn token(&self) -> &'static str {
        match self {
            Self::BelowThreshold => "under 120k",
            Self::MidRange => "120k-500k",
            Self::High => "500k+",
        }
    }

    /// Parse from a quiz token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "under 120k" => Some(Self::BelowThreshold),
            "120k-500k" => Some(Self::MidRange),
            "500k+" => Some(Self::High),
            _ => None,
        }
    }

    /// Whether the band lies strictly below the exempt dealer threshold.
    pub fn is_below_threshold(&self) -> bool {
        matches!(self, Self::BelowThreshold)
    }
}

/// Customer base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientBase {
    /// Private consumers.
    #[serde(rename = "private")]
    Private,
    /// Other businesses.
    #[serde(rename = "business")]
    Business,
    /// Both.
    #[serde(rename = "mixed")]
    Mixed,
}

impl ClientBase {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Business => "business",
            Self::Mixed => "mixed",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "private" => Some(Self::Private),
            "business" => Some(Self::Business),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }
}

/// Employee headcount bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeCount {
    #[serde(rename = "0")]
    None,
    #[serde(rename = "1-5")]
    OneToFive,
    #[serde(rename = "6+")]
    SixOrMore,
}

impl EmployeeCount {
    pub fn token(&self) -> &'static str {
        match self {
            Self::None => "0",
            Self::OneToFive => "1-5",
            Self::SixOrMore => "6+",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(Self::None),
            "1-5" => Some(Self::OneToFive),
            "6+" => Some(Self::SixOrMore),
            _ => None,
        }
    }
}

/// Intent to register voluntarily as an authorized dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoluntaryIntent {
    Yes,
    No,
    Unsure,
}

impl VoluntaryIntent {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unsure => "unsure",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "unsure" => Some(Self::Unsure),
            _ => None,
        }
    }
}

/// VAT dealer classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatStatus {
    /// עוסק פטור — below the threshold, charges no VAT.
    Exempt,
    /// עוסק מורשה — mandatory at or above the threshold.
    Authorized,
    /// Exempt-eligible but registering as authorized by choice.
    Choice,
}

impl VatStatus {
    /// Wire value (`exempt`, `authorized`, `choice`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Exempt => "exempt",
            Self::Authorized => "authorized",
            Self::Choice => "choice",
        }
    }

    /// Parse from the wire value.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "exempt" => Some(Self::Exempt),
            "authorized" => Some(Self::Authorized),
            "choice" => Some(Self::Choice),
            _ => None,
        }
    }
}

/// One step of the post-assessment checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// 1-based position within the checklist.
    pub step: u32,
    pub title: String,
    pub description: String,
    /// External reference (usually a gov.il service page).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Label for `link`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    /// Human-readable duration, e.g. "20 דקות".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

/// Flags derived from the classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentMetadata {
    /// Revenue is below the threshold, so exempt status is available.
    pub is_voluntary_eligible: bool,
    /// Double-entry bookkeeping is required.
    pub requires_bookkeeping: bool,
    /// Periodic VAT reports (דוח תקופתי) are required.
    #[serde(rename = "requiresVATReports")]
    pub requires_vat_reports: bool,
    /// Total time to complete the checklist.
    pub estimated_time_to_complete: String,
}

/// Output of the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub status: VatStatus,
    /// Localized status label.
    pub status_text: String,
    /// Localized paragraph justifying the status.
    pub explanation: String,
    /// Ordered next steps; `checklist[i].step == i + 1`.
    pub checklist: Vec<ChecklistItem>,
    pub metadata: AssessmentMetadata,
}
