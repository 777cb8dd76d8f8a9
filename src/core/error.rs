use thiserror::Error;

/// Errors that can occur while building or accepting quiz answers.
///
/// The classifier itself has no error path; every error here is raised
/// before classification.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssessmentError {
    /// The submission failed structural or token validation.
    #[error("invalid quiz answers: {}", join_errors(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A quiz token did not match any known answer for its field.
    #[error("unknown value '{value}' for field '{field}'")]
    UnknownToken { field: String, value: String },

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl AssessmentError {
    /// The individual validation errors, if this is an input rejection.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

/// A single validation error with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending quiz field (empty for the document itself).
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
