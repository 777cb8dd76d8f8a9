use serde_json::Value;

use crate::core::ValidationError;

/// Field names of a quiz submission, in quiz order.
pub const QUIZ_FIELDS: [&str; 5] = ["activity", "revenue", "clients", "employees", "voluntary"];

/// Structural check of a raw submission.
/// Returns all validation errors found (not just the first).
///
/// Token values are not checked here; see [`super::parse_answers`].
pub fn validate_answers(value: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(object) = value.as_object() else {
        errors.push(ValidationError::new("", "answers must be a JSON object"));
        return errors;
    };

    for field in QUIZ_FIELDS {
        match object.get(field) {
            None | Some(Value::Null) => {
                errors.push(ValidationError::new(field, "field is required"));
            }
            Some(Value::String(_)) => {}
            Some(other) => {
                errors.push(ValidationError::new(
                    field,
                    format!("must be a string, got {}", type_name(other)),
                ));
            }
        }
    }

    for key in object.keys() {
        if !QUIZ_FIELDS.contains(&key.as_str()) {
            errors.push(ValidationError::new(key.as_str(), "unknown field"));
        }
    }

    errors
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "activity": "freelance",
            "revenue": "under 120k",
            "clients": "private",
            "employees": "0",
            "voluntary": "no",
        })
    }

    #[test]
    fn valid_submission_passes() {
        assert!(validate_answers(&valid()).is_empty());
    }

    #[test]
    fn missing_employees_rejected() {
        let mut v = valid();
        v.as_object_mut().unwrap().remove("employees");
        let errors = validate_answers(&v);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "employees");
    }

    #[test]
    fn null_counts_as_missing() {
        let mut v = valid();
        v["clients"] = Value::Null;
        let errors = validate_answers(&v);
        assert_eq!(errors[0].message, "field is required");
    }

    #[test]
    fn non_string_rejected() {
        let mut v = valid();
        v["employees"] = json!(3);
        v["voluntary"] = json!(["yes"]);
        let errors = validate_answers(&v);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("number"));
        assert!(errors[1].message.contains("array"));
    }

    #[test]
    fn extra_field_rejected() {
        let mut v = valid();
        v["email"] = json!("a@b.co.il");
        let errors = validate_answers(&v);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn non_object_rejected() {
        assert_eq!(validate_answers(&json!("answers")).len(), 1);
        assert_eq!(validate_answers(&json!([1, 2])).len(), 1);
    }

    #[test]
    fn all_problems_reported_together() {
        let errors = validate_answers(&json!({}));
        assert_eq!(errors.len(), QUIZ_FIELDS.len());
    }
}
