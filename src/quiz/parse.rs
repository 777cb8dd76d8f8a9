use serde_json::Value;
use tracing::warn;

use super::validate::validate_answers;
use crate::core::*;
use crate::vat::classify;

/// Parse a raw submission into typed answers.
///
/// # Errors
///
/// Returns `AssessmentError::InvalidInput` if the submission fails
/// structural validation or any field carries an unknown token. All
/// problems are listed, not just the first.
pub fn parse_answers(value: &Value) -> Result<QuizAnswers, AssessmentError> {
    let errors = validate_answers(value);
    if !errors.is_empty() {
        return Err(AssessmentError::InvalidInput(errors));
    }

    let activity = token(value, "activity", Activity::from_token);
    let revenue = token(value, "revenue", RevenueBand::from_token);
    let clients = token(value, "clients", ClientBase::from_token);
    let employees = token(value, "employees", EmployeeCount::from_token);
    let voluntary = token(value, "voluntary", VoluntaryIntent::from_token);

    match (activity, revenue, clients, employees, voluntary) {
        (Ok(activity), Ok(revenue), Ok(clients), Ok(employees), Ok(voluntary)) => {
            Ok(QuizAnswers {
                activity,
                revenue,
                clients,
                employees,
                voluntary,
            })
        }
        (activity, revenue, clients, employees, voluntary) => {
            let errors = [
                activity.err(),
                revenue.err(),
                clients.err(),
                employees.err(),
                voluntary.err(),
            ]
            .into_iter()
            .flatten()
            .map(|e| match e {
                AssessmentError::UnknownToken { field, value } => {
                    ValidationError::new(field, format!("unknown value '{value}'"))
                }
                other => ValidationError::new("", other.to_string()),
            })
            .collect();
            Err(AssessmentError::InvalidInput(errors))
        }
    }
}

fn token<T>(
    value: &Value,
    field: &str,
    from_token: fn(&str) -> Option<T>,
) -> Result<T, AssessmentError> {
    let raw = value.get(field).and_then(Value::as_str).unwrap_or_default();
    from_token(raw).ok_or_else(|| AssessmentError::UnknownToken {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// Validate, parse and classify a raw submission.
///
/// The classifier only ever sees answers that passed validation.
pub fn assess_json(value: &Value) -> Result<AssessmentResult, AssessmentError> {
    let answers = parse_answers(value).inspect_err(|e| {
        warn!(errors = e.validation_errors().len(), "rejected quiz submission: {e}");
    })?;
    Ok(classify(&answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_known_tokens() {
        let answers = parse_answers(&json!({
            "activity": "ngo",
            "revenue": "120k-500k",
            "clients": "mixed",
            "employees": "6+",
            "voluntary": "unsure",
        }))
        .unwrap();
        assert_eq!(answers.activity, Activity::Ngo);
        assert_eq!(answers.revenue, RevenueBand::MidRange);
        assert_eq!(answers.employees, EmployeeCount::SixOrMore);
    }

    #[test]
    fn unknown_revenue_is_not_defaulted() {
        let err = parse_answers(&json!({
            "activity": "freelance",
            "revenue": "עד 100 אלף",
            "clients": "private",
            "employees": "0",
            "voluntary": "no",
        }))
        .unwrap_err();
        let errors = err.validation_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "revenue");
    }

    #[test]
    fn every_unknown_token_listed() {
        let err = parse_answers(&json!({
            "activity": "startup",
            "revenue": "under 120k",
            "clients": "everyone",
            "employees": "0",
            "voluntary": "maybe",
        }))
        .unwrap_err();
        let fields: Vec<&str> = err
            .validation_errors()
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(fields, vec!["activity", "clients", "voluntary"]);
    }

    #[test]
    fn structural_errors_come_first() {
        let err = assess_json(&json!({ "revenue": 5 })).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidInput(_)));
        assert_eq!(err.validation_errors().len(), 5);
    }
}
