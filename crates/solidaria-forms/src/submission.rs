// File: src/submission.rs
// Purpose: Submitted form snapshot and whole-form validation

use std::collections::HashMap;

use serde::Serialize;

use crate::rules::{RuleContext, RuleSet};

/// Snapshot of a submitted form, field name to raw value
///
/// Mirrors what the browser's FormData yields: an empty text input shows up
/// with an empty value, a checked checkbox as an entry carrying its own
/// name, and an unchecked one not at all.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Submission {
    values: HashMap<String, String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Sets a text field value
    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Marks a checkbox as checked
    pub fn check(&mut self, name: &str) {
        self.values.insert(name.to_string(), name.to_string());
    }

    /// Raw value of a field, `None` when the field was not submitted
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether a checkbox was checked (present in the submission)
    pub fn is_checked(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Every submitted field and value
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Whole-form validation outcome
#[derive(Debug, Clone, Default)]
pub struct FormReport {
    /// Failing fields in rule declaration order, name to message
    pub field_errors: Vec<(&'static str, String)>,
    /// Message for the participation cross-field constraint, when violated
    pub participation_error: Option<String>,
}

impl FormReport {
    /// True when every field and the cross-field constraint passed
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.participation_error.is_none()
    }

    /// Message recorded for a failing field
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }
}

impl RuleSet {
    /// Evaluates every rule whose field is part of the submission
    ///
    /// Fields the submission does not carry are skipped outright: a rule for
    /// a field the current markup never rendered is simply not applicable.
    /// Failing fields land in the report in rule declaration order.
    pub fn validate_submission(&self, submission: &Submission, ctx: &RuleContext) -> FormReport {
        let mut report = FormReport::default();

        for rule in self.iter() {
            let Some(value) = submission.get(rule.name) else {
                continue;
            };
            let result = rule.evaluate(value, ctx);
            if !result.valid {
                report
                    .field_errors
                    .push((rule.name, result.message.unwrap_or_default()));
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::FieldRule;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ctx() -> RuleContext {
        RuleContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn rules() -> RuleSet {
        RuleSet::new()
            .rule(FieldRule::new("nome").required("nome obrigatório"))
            .rule(FieldRule::new("cidade").required("cidade obrigatória"))
    }

    #[test]
    fn test_errors_follow_rule_order() {
        let mut submission = Submission::new();
        submission.set("cidade", "");
        submission.set("nome", "");

        let report = rules().validate_submission(&submission, &ctx());
        let fields: Vec<_> = report.field_errors.iter().map(|(name, _)| *name).collect();
        assert_eq!(fields, vec!["nome", "cidade"]);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_absent_field_is_not_validated() {
        let mut submission = Submission::new();
        submission.set("nome", "Maria");
        // "cidade" never rendered, so its rule does not apply

        let report = rules().validate_submission(&submission, &ctx());
        assert!(report.is_valid());
        assert_eq!(report.error_for("cidade"), None);
    }

    #[test]
    fn test_error_for_returns_the_message() {
        let mut submission = Submission::new();
        submission.set("nome", "");
        submission.set("cidade", "São Paulo");

        let report = rules().validate_submission(&submission, &ctx());
        assert_eq!(report.error_for("nome"), Some("nome obrigatório"));
        assert_eq!(report.error_for("cidade"), None);
    }

    #[test]
    fn test_checkbox_encoding() {
        let mut submission = Submission::new();
        submission.check("voluntario");

        assert!(submission.is_checked("voluntario"));
        assert!(!submission.is_checked("doador"));
        assert_eq!(submission.get("voluntario"), Some("voluntario"));
    }

    #[test]
    fn test_submission_serializes_as_a_flat_map() {
        let mut submission = Submission::new();
        submission.set("nome", "Maria");
        submission.check("doador");

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["nome"], "Maria");
        assert_eq!(json["doador"], "doador");
    }
}
