//! Theme Persistence
//!
//! Dark/light theme stored in localStorage and applied as a `data-theme`
//! attribute on the document element. Dark is the default for first-time
//! visitors.

pub const THEME_STORAGE_KEY: &str = "akvrix_theme";

const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Loose parse: anything that is not "light" is dark.
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown on the toggle button: sun while dark, moon while light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "ri-sun-line",
            Theme::Light => "ri-moon-line",
        }
    }
}

/// Saved theme, defaulting to dark.
pub fn load() -> Theme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    match stored {
        Some(raw) => Theme::from_stored(&raw),
        None => Theme::default(),
    }
}

/// Set `data-theme` on the document element.
pub fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

/// Persist the choice for the next visit.
pub fn persist(theme: Theme) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(storage) = storage {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn test_stored_light() {
        assert_eq!(Theme::from_stored("light"), Theme::Light);
    }

    #[test]
    fn test_unknown_value_falls_back_to_dark() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("solarized"), Theme::Dark);
        assert_eq!(Theme::from_stored(""), Theme::Dark);
    }

    #[test]
    fn test_toggle_swaps_theme_and_icon() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.icon_class(), "ri-sun-line");
        assert_eq!(Theme::Light.icon_class(), "ri-moon-line");
    }
}
