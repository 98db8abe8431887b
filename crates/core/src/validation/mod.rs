//! Declarative field validation.
//!
//! Rule maps stored alongside each field are translated into constraints
//! ([`rules`]) and evaluated against raw values ([`evaluator`]), all without
//! database dependencies.

pub mod evaluator;
pub mod rules;

pub use evaluator::{validate_value, INVALID_EMAIL_MESSAGE, NOT_BLANK_MESSAGE};
pub use rules::{map_rules, Constraint, ConstraintViolation};
