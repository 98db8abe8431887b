//! Rule mapping: declarative rule maps to executable constraints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::numeric::parse_numeric_str;

/// One executable validation check derived from a declarative rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Fails on `null`, `false`, empty string, empty array or object.
    NotBlank,
    /// Fails on strings that are not shaped like an email address.
    Email,
    GreaterThanOrEqual(Number),
    LessThanOrEqual(Number),
}

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    /// Name of the offending field.
    pub field_path: String,
    pub message: String,
    pub invalid_value: Value,
}

type RuleConstructor = fn(&Value) -> Option<Constraint>;

/// Recognized rule keys, in evaluation order. Add rows to support new rules.
const RULE_TABLE: &[(&str, RuleConstructor)] = &[
    ("required", required),
    ("email", email),
    ("min", min),
    ("max", max),
];

/// Translate a rule map into an ordered list of constraints.
///
/// Order follows [`RULE_TABLE`], not the map's key order. Unknown keys are
/// ignored, so an empty or all-unknown map yields no constraints.
pub fn map_rules(rules: &Map<String, Value>) -> Vec<Constraint> {
    RULE_TABLE
        .iter()
        .filter_map(|(key, build)| rules.get(*key).and_then(|param| build(param)))
        .collect()
}

fn required(param: &Value) -> Option<Constraint> {
    is_truthy(param).then_some(Constraint::NotBlank)
}

fn email(param: &Value) -> Option<Constraint> {
    is_truthy(param).then_some(Constraint::Email)
}

fn min(param: &Value) -> Option<Constraint> {
    numeric_param(param).map(Constraint::GreaterThanOrEqual)
}

fn max(param: &Value) -> Option<Constraint> {
    numeric_param(param).map(Constraint::LessThanOrEqual)
}

/// Loose truthiness for flag rules: `"0"`, `0`, `""`, `false`, `null` and
/// empty containers are all off.
fn is_truthy(param: &Value) -> bool {
    match param {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Bound for a comparison rule. Numeric strings are accepted; anything else
/// disables the rule.
fn numeric_param(param: &Value) -> Option<Number> {
    match param {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(i) => Some(Number::from(i)),
            Err(_) => parse_numeric_str(s).and_then(Number::from_f64),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rules(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("rules must be an object")
    }

    #[test]
    fn required_maps_to_not_blank() {
        assert_eq!(map_rules(&rules(json!({"required": true}))), [Constraint::NotBlank]);
    }

    #[test]
    fn email_maps_to_email() {
        assert_eq!(map_rules(&rules(json!({"email": true}))), [Constraint::Email]);
    }

    #[test]
    fn min_keeps_its_bound() {
        let constraints = map_rules(&rules(json!({"min": 10})));
        assert_eq!(constraints, [Constraint::GreaterThanOrEqual(Number::from(10))]);
    }

    #[test]
    fn max_keeps_its_bound() {
        let constraints = map_rules(&rules(json!({"max": 100})));
        assert_eq!(constraints, [Constraint::LessThanOrEqual(Number::from(100))]);
    }

    #[test]
    fn all_rules_map_in_table_order() {
        // Key order in the map is deliberately reversed.
        let constraints = map_rules(&rules(json!({
            "max": 10,
            "min": 5,
            "email": true,
            "required": true
        })));
        assert_eq!(
            constraints,
            [
                Constraint::NotBlank,
                Constraint::Email,
                Constraint::GreaterThanOrEqual(Number::from(5)),
                Constraint::LessThanOrEqual(Number::from(10)),
            ]
        );
    }

    #[test]
    fn empty_rules_yield_nothing() {
        assert!(map_rules(&Map::new()).is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let constraints = map_rules(&rules(json!({"regex": "^a", "length": 3})));
        assert!(constraints.is_empty());

        let constraints = map_rules(&rules(json!({"regex": "^a", "required": true})));
        assert_eq!(constraints, [Constraint::NotBlank]);
    }

    #[test]
    fn falsy_flags_are_off() {
        for off in [json!(false), json!(0), json!(""), json!("0"), json!(null), json!([])] {
            let constraints = map_rules(&rules(json!({"required": off, "email": off})));
            assert!(constraints.is_empty(), "flag {off} should be off");
        }
    }

    #[test]
    fn truthy_flags_are_on() {
        for on in [json!(1), json!("yes"), json!([1])] {
            assert_eq!(map_rules(&rules(json!({"required": on}))), [Constraint::NotBlank]);
        }
    }

    #[test]
    fn numeric_string_bounds_are_accepted() {
        let constraints = map_rules(&rules(json!({"min": "5", "max": "7.5"})));
        assert_eq!(
            constraints,
            [
                Constraint::GreaterThanOrEqual(Number::from(5)),
                Constraint::LessThanOrEqual(Number::from_f64(7.5).unwrap()),
            ]
        );
    }

    #[test]
    fn non_numeric_bounds_disable_the_rule() {
        let constraints = map_rules(&rules(json!({"min": "abc", "max": null})));
        assert!(constraints.is_empty());
    }
}
