// File: src/accessibility.rs
// Purpose: Accessibility preferences with local persistence

use anyhow::Result;

use crate::storage::Storage;

// Storage keys, matching the original site's localStorage entries
const DARK_MODE_KEY: &str = "darkMode";
const HIGH_CONTRAST_KEY: &str = "highContrast";
const FONT_SIZE_KEY: &str = "fontSize";

/// Font size steps the accessibility panel offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
    XLarge,
}

impl FontSize {
    /// Wire value used in storage and in the `data-font-size` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Normal => "normal",
            FontSize::Large => "large",
            FontSize::XLarge => "xlarge",
        }
    }

    /// Parses the wire value; anything unknown falls back to `Normal`
    pub fn parse(value: &str) -> Self {
        match value {
            "small" => FontSize::Small,
            "large" => FontSize::Large,
            "xlarge" => FontSize::XLarge,
            _ => FontSize::Normal,
        }
    }
}

/// Values for the root element's accessibility data attributes
///
/// `None` means the attribute is absent, matching how the original page
/// removed `data-theme` and `data-contrast` when the toggle was off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttrs {
    pub theme: Option<&'static str>,
    pub contrast: Option<&'static str>,
    pub font_size: &'static str,
}

/// Accessibility preferences: dark mode, high contrast, font size
///
/// Loaded from the local store at startup; every change is written back
/// immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub high_contrast: bool,
    pub font_size: FontSize,
}

impl Preferences {
    /// Loads preferences from the store, using defaults for missing keys
    pub fn load(store: &dyn Storage) -> Result<Self> {
        Ok(Self {
            dark_mode: store.get(DARK_MODE_KEY)?.as_deref() == Some("true"),
            high_contrast: store.get(HIGH_CONTRAST_KEY)?.as_deref() == Some("true"),
            font_size: store
                .get(FONT_SIZE_KEY)?
                .map(|v| FontSize::parse(&v))
                .unwrap_or_default(),
        })
    }

    /// Flips dark mode and persists the new value
    pub fn toggle_dark_mode(&mut self, store: &mut dyn Storage) -> Result<bool> {
        self.dark_mode = !self.dark_mode;
        store.set(DARK_MODE_KEY, bool_str(self.dark_mode))?;
        Ok(self.dark_mode)
    }

    /// Flips high contrast and persists the new value
    pub fn toggle_high_contrast(&mut self, store: &mut dyn Storage) -> Result<bool> {
        self.high_contrast = !self.high_contrast;
        store.set(HIGH_CONTRAST_KEY, bool_str(self.high_contrast))?;
        Ok(self.high_contrast)
    }

    /// Sets the font size and persists it
    pub fn set_font_size(&mut self, size: FontSize, store: &mut dyn Storage) -> Result<()> {
        self.font_size = size;
        store.set(FONT_SIZE_KEY, size.as_str())?;
        Ok(())
    }

    /// Restores every preference to its default and persists that
    pub fn reset(&mut self, store: &mut dyn Storage) -> Result<()> {
        *self = Self::default();
        store.set(DARK_MODE_KEY, "false")?;
        store.set(HIGH_CONTRAST_KEY, "false")?;
        store.set(FONT_SIZE_KEY, FontSize::Normal.as_str())?;
        Ok(())
    }

    /// Root-element data attributes the host should apply
    pub fn document_attrs(&self) -> DocumentAttrs {
        DocumentAttrs {
            theme: self.dark_mode.then_some("dark"),
            contrast: self.high_contrast.then_some("high"),
            font_size: self.font_size.as_str(),
        }
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn test_defaults_on_empty_store() {
        let store = MemoryStorage::new();
        let prefs = Preferences::load(&store).unwrap();

        assert!(!prefs.dark_mode);
        assert!(!prefs.high_contrast);
        assert_eq!(prefs.font_size, FontSize::Normal);
    }

    #[test]
    fn test_toggles_persist_and_reload() {
        let mut store = MemoryStorage::new();
        let mut prefs = Preferences::load(&store).unwrap();

        assert!(prefs.toggle_dark_mode(&mut store).unwrap());
        prefs.set_font_size(FontSize::Large, &mut store).unwrap();

        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
        assert_eq!(store.get("fontSize").unwrap().as_deref(), Some("large"));

        let reloaded = Preferences::load(&store).unwrap();
        assert!(reloaded.dark_mode);
        assert_eq!(reloaded.font_size, FontSize::Large);
    }

    #[test]
    fn test_double_toggle_restores_initial_state() {
        let mut store = MemoryStorage::new();
        let mut prefs = Preferences::default();

        prefs.toggle_high_contrast(&mut store).unwrap();
        assert!(!prefs.toggle_high_contrast(&mut store).unwrap());
        assert_eq!(store.get("highContrast").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_unknown_font_size_falls_back_to_normal() {
        let mut store = MemoryStorage::new();
        store.set("fontSize", "gigante").unwrap();

        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs.font_size, FontSize::Normal);
    }

    #[test]
    fn test_reset_writes_defaults_back() {
        let mut store = MemoryStorage::new();
        let mut prefs = Preferences::default();
        prefs.toggle_dark_mode(&mut store).unwrap();
        prefs.set_font_size(FontSize::XLarge, &mut store).unwrap();

        prefs.reset(&mut store).unwrap();

        assert_eq!(prefs, Preferences::default());
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(store.get("fontSize").unwrap().as_deref(), Some("normal"));
    }

    #[test]
    fn test_document_attrs_follow_preferences() {
        let prefs = Preferences {
            dark_mode: true,
            high_contrast: false,
            font_size: FontSize::Large,
        };
        let attrs = prefs.document_attrs();

        assert_eq!(attrs.theme, Some("dark"));
        assert_eq!(attrs.contrast, None);
        assert_eq!(attrs.font_size, "large");
    }
}
