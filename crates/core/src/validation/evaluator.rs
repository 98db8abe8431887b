//! Constraint evaluator. Pure logic, total over any JSON value.

use serde_json::{Number, Value};
use validator::ValidateEmail;

use super::rules::{Constraint, ConstraintViolation};
use crate::numeric::as_number;

/// Message for a missing required value.
pub const NOT_BLANK_MESSAGE: &str = "Ce champ est obligatoire.";
/// Message for a value that is not an email address.
pub const INVALID_EMAIL_MESSAGE: &str = "Email invalide.";

/// Evaluate every constraint against one field value.
///
/// All constraints run; violations come back in constraint order, each
/// tagged with `field_path`.
pub fn validate_value(
    field_path: &str,
    value: &Value,
    constraints: &[Constraint],
) -> Vec<ConstraintViolation> {
    constraints
        .iter()
        .filter_map(|constraint| constraint.check(value))
        .map(|message| ConstraintViolation {
            field_path: field_path.to_string(),
            message,
            invalid_value: value.clone(),
        })
        .collect()
}

impl Constraint {
    /// Check a value, returning the violation message on failure.
    pub fn check(&self, value: &Value) -> Option<String> {
        match self {
            Constraint::NotBlank => check_not_blank(value),
            Constraint::Email => check_email(value),
            Constraint::GreaterThanOrEqual(limit) => check_compare(value, limit, Bound::Lower),
            Constraint::LessThanOrEqual(limit) => check_compare(value, limit, Bound::Upper),
        }
    }
}

fn check_not_blank(value: &Value) -> Option<String> {
    let blank = match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    };
    blank.then(|| NOT_BLANK_MESSAGE.to_string())
}

fn check_email(value: &Value) -> Option<String> {
    let valid = match value {
        // Presence is the job of `required`.
        Value::Null => true,
        Value::String(s) if s.is_empty() => true,
        Value::String(s) => s.as_str().validate_email() && has_dotted_domain(s),
        _ => false,
    };
    (!valid).then(|| INVALID_EMAIL_MESSAGE.to_string())
}

/// `validator` accepts bare hosts like `localhost`; form addresses need a
/// dot in the domain.
fn has_dotted_domain(address: &str) -> bool {
    address
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.') && !domain.ends_with('.'))
}

#[derive(Clone, Copy)]
enum Bound {
    Lower,
    Upper,
}

fn check_compare(value: &Value, limit: &Number, bound: Bound) -> Option<String> {
    if value.is_null() {
        return None;
    }
    let Some(actual) = as_number(value) else {
        return Some("This value should be of type numeric.".to_string());
    };
    let limit_f = limit.as_f64()?;
    match bound {
        Bound::Lower if actual < limit_f => Some(format!(
            "This value should be greater than or equal to {limit}."
        )),
        Bound::Upper if actual > limit_f => Some(format!(
            "This value should be less than or equal to {limit}."
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(constraint: Constraint, value: Value) -> Option<String> {
        constraint.check(&value)
    }

    #[test]
    fn not_blank_rejects_empty_values() {
        for blank in [Value::Null, json!(""), json!([]), json!({}), json!(false)] {
            assert!(check(Constraint::NotBlank, blank.clone()).is_some(), "{blank} is blank");
        }
    }

    #[test]
    fn not_blank_accepts_present_values() {
        for present in [json!("x"), json!("0"), json!(0), json!(true), json!([1]), json!(" ")] {
            assert!(check(Constraint::NotBlank, present.clone()).is_none(), "{present} is present");
        }
    }

    #[test]
    fn email_accepts_addresses() {
        assert!(check(Constraint::Email, json!("a@b.com")).is_none());
        assert!(check(Constraint::Email, json!("first.last@example.org")).is_none());
    }

    #[test]
    fn email_rejects_malformed_strings() {
        let message = check(Constraint::Email, json!("not-an-email"));
        assert_eq!(message.as_deref(), Some(INVALID_EMAIL_MESSAGE));
        assert!(check(Constraint::Email, json!("a@")).is_some());
    }

    #[test]
    fn email_requires_a_dotted_domain() {
        for address in ["user@localhost", "user@intranet", "user@example."] {
            assert_eq!(
                check(Constraint::Email, json!(address)).as_deref(),
                Some(INVALID_EMAIL_MESSAGE),
                "{address} should be rejected"
            );
        }
        assert!(check(Constraint::Email, json!("user@mail.localhost")).is_none());
    }

    #[test]
    fn not_blank_uses_required_message() {
        assert_eq!(check(Constraint::NotBlank, json!("")).as_deref(), Some(NOT_BLANK_MESSAGE));
    }

    #[test]
    fn email_skips_absent_values() {
        assert!(check(Constraint::Email, Value::Null).is_none());
        assert!(check(Constraint::Email, json!("")).is_none());
    }

    #[test]
    fn email_rejects_non_strings() {
        assert!(check(Constraint::Email, json!(42)).is_some());
        assert!(check(Constraint::Email, json!(["a@b.com"])).is_some());
    }

    #[test]
    fn greater_than_or_equal_is_inclusive() {
        let min = || Constraint::GreaterThanOrEqual(Number::from(5));
        assert!(check(min(), json!(5)).is_none());
        assert!(check(min(), json!(5.5)).is_none());
        assert_eq!(
            check(min(), json!(4)).as_deref(),
            Some("This value should be greater than or equal to 5.")
        );
    }

    #[test]
    fn less_than_or_equal_is_inclusive() {
        let max = || Constraint::LessThanOrEqual(Number::from(10));
        assert!(check(max(), json!(10)).is_none());
        assert_eq!(
            check(max(), json!(10.01)).as_deref(),
            Some("This value should be less than or equal to 10.")
        );
    }

    #[test]
    fn comparisons_accept_numeric_strings() {
        let min = Constraint::GreaterThanOrEqual(Number::from(5));
        assert!(check(min.clone(), json!("7")).is_none());
        assert!(check(min, json!("3")).is_some());
    }

    #[test]
    fn comparisons_skip_null_and_reject_non_numeric() {
        let min = Constraint::GreaterThanOrEqual(Number::from(5));
        assert!(check(min.clone(), Value::Null).is_none());
        assert_eq!(
            check(min, json!("abc")).as_deref(),
            Some("This value should be of type numeric.")
        );
    }

    #[test]
    fn validate_value_keeps_every_violation_in_order() {
        let constraints = [
            Constraint::Email,
            Constraint::GreaterThanOrEqual(Number::from(5)),
        ];
        let violations = validate_value("contact", &json!("nope"), &constraints);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.field_path == "contact"));
        assert!(violations.iter().all(|v| v.invalid_value == json!("nope")));
        assert_eq!(violations[0].message, INVALID_EMAIL_MESSAGE);
        assert_eq!(violations[1].message, "This value should be of type numeric.");
    }

    #[test]
    fn validate_value_without_constraints_is_clean() {
        assert!(validate_value("anything", &Value::Null, &[]).is_empty());
    }
}
