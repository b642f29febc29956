// Solidariedade Forms - declarative field rules and the signup validation flow
// Rules are data: a table of constraints per field, evaluated in a fixed
// order, with the submitted form validated as a whole on submit.

pub mod cadastro;
pub mod masks;
pub mod rules;
pub mod submission;

pub use rules::{
    CustomCheck, FieldRule, RuleContext, RuleMessages, RuleSet, ValidationResult, Violation,
};
pub use submission::{FormReport, Submission};
