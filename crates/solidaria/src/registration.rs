// File: src/registration.rs
// Purpose: Signup form controller - field feedback, submission, deferred reset

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};

use solidaria_forms::cadastro;
use solidaria_forms::{FormReport, RuleContext, RuleSet, Submission, ValidationResult};

use crate::storage::Storage;

/// The two page-level banners the signup form shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Success,
    Error,
}

/// Form side of the document collaborator
///
/// `show_field_error` marks the input invalid and fills its `erro-<field>`
/// span; `clear_field_error` marks it valid and empties the span. The rest
/// drive the alert blocks and the native form reset.
pub trait FormHost {
    fn show_field_error(&mut self, field: &str, message: &str);
    fn clear_field_error(&mut self, field: &str);
    fn show_alert(&mut self, alert: Alert);
    fn hide_alert(&mut self, alert: Alert);
    fn reset_form(&mut self);
}

/// A scheduled form clear waiting for its due time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingReset {
    due: DateTime<Utc>,
}

/// Controller for the signup form
///
/// Built fresh every time the cadastro page is rendered. Owns the deferred
/// clear that follows a successful submission, so dropping the controller
/// (navigating away) cancels the clear instead of letting it fire against
/// markup that no longer exists.
pub struct RegistrationForm {
    rules: RuleSet,
    record_key: String,
    reset_delay: Duration,
    pending_reset: Option<PendingReset>,
}

impl RegistrationForm {
    /// New controller over the standard rule table
    pub fn new(record_key: impl Into<String>, reset_delay: Duration) -> Self {
        Self {
            rules: cadastro::rules(),
            record_key: record_key.into(),
            reset_delay,
            pending_reset: None,
        }
    }

    /// The rule table this controller validates against
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// A field lost focus: evaluate it and reflect the outcome either way
    pub fn field_blurred(
        &self,
        field: &str,
        value: &str,
        today: NaiveDate,
        host: &mut dyn FormHost,
    ) -> ValidationResult {
        let result = self.rules.evaluate(field, value, &RuleContext::new(today));
        if result.valid {
            host.clear_field_error(field);
        } else {
            host.show_field_error(field, result.message.as_deref().unwrap_or_default());
        }
        result
    }

    /// A field changed while focused: clear its error as soon as the value
    /// turns valid, never flag a new error mid-typing
    pub fn field_edited(&self, field: &str, value: &str, today: NaiveDate, host: &mut dyn FormHost) {
        let result = self.rules.evaluate(field, value, &RuleContext::new(today));
        if result.valid {
            host.clear_field_error(field);
        }
    }

    /// Validates the whole submission and drives the page feedback
    ///
    /// On success the record is persisted under the configured key and the
    /// form clear is scheduled `reset_delay` after `now`. On failure nothing
    /// is stored and any previously scheduled clear keeps its due time.
    pub fn submit(
        &mut self,
        submission: &Submission,
        now: DateTime<Utc>,
        store: &mut dyn Storage,
        host: &mut dyn FormHost,
    ) -> Result<FormReport> {
        let ctx = RuleContext::new(now.date_naive());
        let report = cadastro::validate(&self.rules, submission, &ctx);

        // Per-field feedback for everything the form actually submitted
        for field in self.rules.field_names() {
            if submission.get(field).is_none() {
                continue;
            }
            match report.error_for(field) {
                Some(message) => host.show_field_error(field, message),
                None => host.clear_field_error(field),
            }
        }

        if report.is_valid() {
            let record = serde_json::to_string(submission.values())
                .context("Failed to encode signup record")?;
            store
                .set(&self.record_key, &record)
                .context("Failed to persist signup record")?;
            tracing::info!(key = %self.record_key, "signup record stored");

            host.hide_alert(Alert::Error);
            host.show_alert(Alert::Success);
            self.pending_reset = Some(PendingReset {
                due: now + self.reset_delay,
            });
        } else {
            tracing::debug!(
                field_errors = report.field_errors.len(),
                participation = report.participation_error.is_some(),
                "signup submission rejected"
            );
            host.hide_alert(Alert::Success);
            host.show_alert(Alert::Error);
        }

        Ok(report)
    }

    /// Fires the scheduled clear once its time has come
    ///
    /// Safe to call on every host tick; returns true when the clear ran.
    /// The clear resets the form, hides both banners and wipes the
    /// per-field feedback, leaving the page as freshly rendered.
    pub fn tick(&mut self, now: DateTime<Utc>, host: &mut dyn FormHost) -> bool {
        match self.pending_reset {
            Some(reset) if now >= reset.due => {
                self.pending_reset = None;
                host.reset_form();
                host.hide_alert(Alert::Success);
                host.hide_alert(Alert::Error);
                for field in self.rules.field_names() {
                    host.clear_field_error(field);
                }
                true
            }
            _ => false,
        }
    }

    /// Drops the scheduled clear without firing it
    pub fn cancel_reset(&mut self) {
        if self.pending_reset.take().is_some() {
            tracing::debug!("pending form clear cancelled");
        }
    }

    /// Whether a clear is still scheduled
    pub fn reset_pending(&self) -> bool {
        self.pending_reset.is_some()
    }
}
