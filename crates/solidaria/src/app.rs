// File: src/app.rs
// Purpose: Site assembly - router, signup controller, preferences, storage

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};

use solidaria_forms::{FormReport, Submission};
use solidaria_router::{PageShell, Pages, Router};

use crate::accessibility::{FontSize, Preferences};
use crate::config::SiteConfig;
use crate::pages;
use crate::registration::{FormHost, RegistrationForm};
use crate::storage::Storage;

/// The assembled site core
///
/// Owns every piece of client state the page scripts juggle: the page
/// registry and router, the signup controller for the currently rendered
/// form, the accessibility preferences and the local store behind both.
pub struct Site {
    config: SiteConfig,
    pages: Pages,
    router: Router,
    store: Box<dyn Storage>,
    preferences: Preferences,
    registration: Option<RegistrationForm>,
}

impl Site {
    /// Builds the site over the given store and configuration
    pub fn new(config: SiteConfig, store: Box<dyn Storage>) -> Result<Self> {
        let preferences = Preferences::load(&*store)?;
        Ok(Self {
            config,
            pages: pages::registry(),
            router: Router::new(),
            store,
            preferences,
            registration: None,
        })
    }

    /// Renders the initial page into the shell
    pub fn start(&mut self, shell: &mut dyn PageShell) {
        tracing::info!(
            page = self.router.current_page(),
            storage = self.store.name(),
            "starting site"
        );
        self.router.render_current(&self.pages, shell);
        self.sync_registration();
    }

    /// Navigates to a page key from a `data-page` link
    ///
    /// Unknown keys are ignored and the rendered page stays up. A landing
    /// on the cadastro page attaches a fresh signup controller; leaving it
    /// drops the controller together with any pending form clear.
    pub fn navigate(&mut self, key: &str, shell: &mut dyn PageShell) -> bool {
        if !self.router.navigate(key, &self.pages, shell) {
            return false;
        }
        tracing::info!(page = key, "navigated");
        self.sync_registration();
        true
    }

    /// Key of the page currently rendered
    pub fn current_page(&self) -> &str {
        self.router.current_page()
    }

    /// Registered pages, mostly for hosts that render their own chrome
    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    fn sync_registration(&mut self) {
        if self.router.current_page() == pages::keys::CADASTRO {
            self.registration = Some(RegistrationForm::new(
                self.config.form.record_key.clone(),
                Duration::seconds(self.config.form.reset_delay_secs as i64),
            ));
        } else if self.registration.take().is_some_and(|r| r.reset_pending()) {
            tracing::debug!("pending form clear dropped by navigation");
        }
    }

    // Signup flow, forwarded to the attached controller. All of these are
    // no-ops unless the cadastro page is the one rendered.

    /// Blur event on a signup field
    pub fn field_blurred(
        &mut self,
        field: &str,
        value: &str,
        now: DateTime<Utc>,
        host: &mut dyn FormHost,
    ) {
        if let Some(form) = &self.registration {
            form.field_blurred(field, value, now.date_naive(), host);
        }
    }

    /// Input event on a signup field
    pub fn field_edited(
        &mut self,
        field: &str,
        value: &str,
        now: DateTime<Utc>,
        host: &mut dyn FormHost,
    ) {
        if let Some(form) = &self.registration {
            form.field_edited(field, value, now.date_naive(), host);
        }
    }

    /// Submit event on the signup form
    ///
    /// `None` means no signup form is attached (another page is rendered).
    pub fn submit(
        &mut self,
        submission: &Submission,
        now: DateTime<Utc>,
        host: &mut dyn FormHost,
    ) -> Result<Option<FormReport>> {
        let Some(form) = self.registration.as_mut() else {
            return Ok(None);
        };
        let report = form.submit(submission, now, &mut *self.store, host)?;
        Ok(Some(report))
    }

    /// Host clock tick; fires the deferred form clear when it is due
    pub fn tick(&mut self, now: DateTime<Utc>, host: &mut dyn FormHost) {
        if let Some(form) = self.registration.as_mut() {
            form.tick(now, host);
        }
    }

    // Accessibility preferences, persisted through the same store.

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        self.preferences.toggle_dark_mode(&mut *self.store)
    }

    pub fn toggle_high_contrast(&mut self) -> Result<bool> {
        self.preferences.toggle_high_contrast(&mut *self.store)
    }

    pub fn set_font_size(&mut self, size: FontSize) -> Result<()> {
        self.preferences.set_font_size(size, &mut *self.store)
    }

    pub fn reset_preferences(&mut self) -> Result<()> {
        self.preferences.reset(&mut *self.store)
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &dyn Storage {
        &*self.store
    }
}
