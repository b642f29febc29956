//! # Solidariedade Router
//!
//! Client-side page navigation over a fixed set of content fragments:
//! - Pages register up front under a string key (`index`, `projetos`, ...)
//! - Navigation looks the key up and swaps content, title and nav highlight
//! - Unknown keys are a silent no-op: state and rendered page stay untouched
//! - Re-navigating to the current page renders it again from scratch
//!
//! The router owns nothing but the current page key. Everything it changes
//! goes through the [`PageShell`] seam, so the same state machine drives a
//! browser bridge, a server-side renderer or a test double.
//!
//! ## Example
//!
//! ```
//! use solidaria_router::{PageRecord, Pages, PageShell, Router};
//!
//! struct Fragment(String);
//!
//! impl PageShell for Fragment {
//!     fn replace_content(&mut self, html: &str) { self.0 = html.to_string(); }
//!     fn set_title(&mut self, _title: &str) {}
//!     fn set_active_nav(&mut self, _key: &str) {}
//!     fn scroll_to_top(&mut self) {}
//! }
//!
//! let mut pages = Pages::new();
//! pages.add(PageRecord::new("index", "Início", "<h2>Bem-vindo</h2>"));
//! pages.add(PageRecord::new("projetos", "Projetos", "<h2>Projetos</h2>"));
//!
//! let mut shell = Fragment(String::new());
//! let mut router = Router::new();
//! assert!(router.navigate("projetos", &pages, &mut shell));
//! assert_eq!(router.current_page(), "projetos");
//! assert!(!router.navigate("contato", &pages, &mut shell));
//! assert_eq!(router.current_page(), "projetos");
//! ```

/// Key of the page every session starts on
pub const INITIAL_PAGE: &str = "index";

/// One navigable page: lookup key, document title, main-region fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub key: String,
    pub title: String,
    pub content: String,
}

impl PageRecord {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Insertion-ordered page registry
///
/// Filled once at startup; lookups are linear, which is plenty for a
/// handful of pages.
#[derive(Debug, Clone, Default)]
pub struct Pages {
    records: Vec<PageRecord>,
}

impl Pages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a page; the first record wins when keys collide
    pub fn add(&mut self, record: PageRecord) {
        self.records.push(record);
    }

    pub fn get(&self, key: &str) -> Option<&PageRecord> {
        self.records.iter().find(|p| p.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Registered keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|p| p.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Host surface the router renders into
///
/// The implementor owns the real document; the router only dictates what
/// changes and in which order.
pub trait PageShell {
    /// Replaces the main content region with the page fragment
    fn replace_content(&mut self, html: &str);

    /// Sets the document title
    fn set_title(&mut self, title: &str);

    /// Highlights the nav link whose `data-page` equals `key` and clears
    /// the highlight on every other link
    fn set_active_nav(&mut self, key: &str);

    /// Scrolls the viewport back to the top
    fn scroll_to_top(&mut self);
}

/// Navigation state machine
///
/// Holds nothing but the key of the page currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: String,
}

impl Router {
    /// Starts on [`INITIAL_PAGE`]
    pub fn new() -> Self {
        Self {
            current: INITIAL_PAGE.to_string(),
        }
    }

    /// Key of the page currently shown
    pub fn current_page(&self) -> &str {
        &self.current
    }

    /// Renders the current page into the shell without scrolling
    ///
    /// The startup path: the initial page is drawn in place, no jump to
    /// the top. Returns false when the current key is not registered.
    pub fn render_current(&self, pages: &Pages, shell: &mut dyn PageShell) -> bool {
        let Some(page) = pages.get(&self.current) else {
            tracing::warn!(key = %self.current, "current page is not registered");
            return false;
        };
        render(page, shell);
        true
    }

    /// Switches to `key` and renders it
    ///
    /// Unknown keys leave the state and the shell untouched and return
    /// false. Navigating to the page already shown renders it again, which
    /// the signup page relies on to get fresh markup.
    pub fn navigate(&mut self, key: &str, pages: &Pages, shell: &mut dyn PageShell) -> bool {
        let Some(page) = pages.get(key) else {
            tracing::debug!(key, "ignoring navigation to unregistered page");
            return false;
        };

        self.current = page.key.clone();
        render(page, shell);
        shell.scroll_to_top();
        true
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Content first, then title, then the nav highlight
fn render(page: &PageRecord, shell: &mut dyn PageShell) {
    shell.replace_content(&page.content);
    shell.set_title(&page.title);
    shell.set_active_nav(&page.key);
}
