// File: src/rules.rs
// Purpose: Field rule descriptors and the ordered evaluator

use chrono::NaiveDate;
use regex::Regex;

/// Violation kinds a field rule can report, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    MinLength,
    MaxLength,
    Pattern,
    Custom,
}

/// User-facing message for each violation kind a rule can produce
#[derive(Debug, Clone, Default)]
pub struct RuleMessages {
    pub required: Option<&'static str>,
    pub min_length: Option<&'static str>,
    pub max_length: Option<&'static str>,
    pub pattern: Option<&'static str>,
    pub custom: Option<&'static str>,
}

impl RuleMessages {
    /// Message registered for a violation kind
    pub fn for_violation(&self, violation: Violation) -> Option<&'static str> {
        match violation {
            Violation::Required => self.required,
            Violation::MinLength => self.min_length,
            Violation::MaxLength => self.max_length,
            Violation::Pattern => self.pattern,
            Violation::Custom => self.custom,
        }
    }
}

/// Ambient data custom predicates can read
///
/// `today` is injected by the caller so date rules stay deterministic.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    pub today: NaiveDate,
}

impl RuleContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// Custom predicate over the raw field value
pub type CustomCheck = fn(&str, &RuleContext) -> bool;

/// Outcome of evaluating one rule against one value
///
/// Created fresh per call; the caller reflects it into the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    /// Successful result, no message
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// Failed result with the message to show
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Declarative validation rule for one form field
///
/// Built once at startup and evaluated uniformly. Constraints attach through
/// the chained setters, each paired with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub custom: Option<CustomCheck>,
    pub messages: RuleMessages,
}

impl FieldRule {
    /// A rule with no constraints for the named field
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            custom: None,
            messages: RuleMessages::default(),
        }
    }

    /// The field must not be blank (empty or whitespace only)
    pub fn required(mut self, message: &'static str) -> Self {
        self.required = true;
        self.messages.required = Some(message);
        self
    }

    /// Minimum value length, counted in characters
    pub fn min_length(mut self, min: usize, message: &'static str) -> Self {
        self.min_length = Some(min);
        self.messages.min_length = Some(message);
        self
    }

    /// Maximum value length, counted in characters
    pub fn max_length(mut self, max: usize, message: &'static str) -> Self {
        self.max_length = Some(max);
        self.messages.max_length = Some(message);
        self
    }

    /// The whole value must match `pattern`
    pub fn pattern(mut self, pattern: &Regex, message: &'static str) -> Self {
        self.pattern = Some(pattern.clone());
        self.messages.pattern = Some(message);
        self
    }

    /// Field-specific predicate, run after every structural constraint
    pub fn custom(mut self, check: CustomCheck, message: &'static str) -> Self {
        self.custom = Some(check);
        self.messages.custom = Some(message);
        self
    }

    /// Applies the rule to a raw input value
    ///
    /// Constraints run in a fixed order and the first violation wins:
    /// required, min length, max length, pattern, custom predicate. A blank
    /// value on an optional rule passes without running the rest.
    pub fn evaluate(&self, value: &str, ctx: &RuleContext) -> ValidationResult {
        let blank = value.trim().is_empty();

        if self.required && blank {
            return self.fail(Violation::Required);
        }
        if blank {
            // Nothing to check on an optional, empty field
            return ValidationResult::pass();
        }

        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return self.fail(Violation::MinLength);
            }
        }
        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return self.fail(Violation::MaxLength);
            }
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return self.fail(Violation::Pattern);
            }
        }
        if let Some(check) = self.custom {
            if !check(value, ctx) {
                return self.fail(Violation::Custom);
            }
        }

        ValidationResult::pass()
    }

    fn fail(&self, violation: Violation) -> ValidationResult {
        ValidationResult {
            valid: false,
            message: self.messages.for_violation(violation).map(str::to_owned),
        }
    }
}

/// Ordered collection of field rules, looked up by field name
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule; declaration order is preserved so error surfacing
    /// stays deterministic
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rule registered for a field name, if any
    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    /// Rules in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluates one field by name
    ///
    /// A name with no registered rule passes: the rule set simply does not
    /// apply to that field.
    pub fn evaluate(&self, name: &str, value: &str, ctx: &RuleContext) -> ValidationResult {
        match self.get(name) {
            Some(rule) => rule.evaluate(value, ctx),
            None => ValidationResult::pass(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use pretty_assertions::assert_eq;

    static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

    fn ctx() -> RuleContext {
        RuleContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn never(_value: &str, _ctx: &RuleContext) -> bool {
        false
    }

    #[test]
    fn test_required_beats_every_other_constraint() {
        let rule = FieldRule::new("campo")
            .required("obrigatório")
            .min_length(3, "curto")
            .pattern(&DIGITS, "não numérico")
            .custom(never, "custom");

        let result = rule.evaluate("   ", &ctx());
        assert!(!result.valid);
        assert_eq!(result.message.as_deref(), Some("obrigatório"));
    }

    #[test]
    fn test_blank_optional_field_passes() {
        let rule = FieldRule::new("campo").min_length(3, "curto").custom(never, "custom");
        assert!(rule.evaluate("", &ctx()).valid);
        assert!(rule.evaluate("  ", &ctx()).valid);
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        let rule = FieldRule::new("campo").min_length(3, "curto");
        // Three accented characters, six bytes
        assert!(rule.evaluate("ãéí", &ctx()).valid);
        assert!(!rule.evaluate("ãé", &ctx()).valid);
    }

    #[test]
    fn test_max_length_counts_characters_not_bytes() {
        let rule = FieldRule::new("campo").max_length(3, "longo");
        assert!(rule.evaluate("ãéí", &ctx()).valid);
        assert!(!rule.evaluate("ãéíó", &ctx()).valid);
    }

    #[test]
    fn test_first_violation_wins_in_declared_order() {
        let rule = FieldRule::new("campo")
            .min_length(5, "curto")
            .pattern(&DIGITS, "não numérico")
            .custom(never, "custom");

        // Too short and non-numeric: min length is reported
        assert_eq!(rule.evaluate("ab", &ctx()).message.as_deref(), Some("curto"));
        // Long enough, non-numeric: pattern is reported
        assert_eq!(
            rule.evaluate("abcde", &ctx()).message.as_deref(),
            Some("não numérico")
        );
        // Structurally fine: the custom predicate is reached
        assert_eq!(
            rule.evaluate("12345", &ctx()).message.as_deref(),
            Some("custom")
        );
    }

    #[test]
    fn test_repeated_evaluation_yields_identical_results() {
        let rule = FieldRule::new("campo")
            .required("obrigatório")
            .min_length(3, "curto")
            .pattern(&DIGITS, "não numérico");

        for value in ["", "12", "abc", "1234"] {
            assert_eq!(rule.evaluate(value, &ctx()), rule.evaluate(value, &ctx()));
        }
    }

    #[test]
    fn test_all_constraints_satisfied_passes() {
        let rule = FieldRule::new("campo")
            .required("obrigatório")
            .min_length(3, "curto")
            .max_length(5, "longo")
            .pattern(&DIGITS, "não numérico");

        let result = rule.evaluate("1234", &ctx());
        assert!(result.valid);
        assert_eq!(result.message, None);
    }

    #[test]
    fn test_rule_set_unknown_field_passes() {
        let rules = RuleSet::new().rule(FieldRule::new("campo").required("obrigatório"));
        assert!(rules.evaluate("outro", "", &ctx()).valid);
    }

    #[test]
    fn test_rule_set_preserves_declaration_order() {
        let rules = RuleSet::new()
            .rule(FieldRule::new("primeiro"))
            .rule(FieldRule::new("segundo"))
            .rule(FieldRule::new("terceiro"));

        let names: Vec<_> = rules.field_names().collect();
        assert_eq!(names, vec!["primeiro", "segundo", "terceiro"]);
    }

    #[test]
    fn test_custom_predicate_sees_injected_today() {
        fn after_2020(value: &str, ctx: &RuleContext) -> bool {
            use chrono::Datelike;
            let _ = value;
            ctx.today.year() > 2020
        }

        let rule = FieldRule::new("campo").custom(after_2020, "cedo demais");
        assert!(rule.evaluate("x", &ctx()).valid);

        let old = RuleContext::new(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        assert!(!rule.evaluate("x", &old).valid);
    }
}
