// Theme colours as an immutable key -> colour lookup with a fallback.
// Built once from the settings and handed to whatever renders feedback.
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    colors: BTreeMap<String, String>,
    fallback: String,
}

impl ThemePalette {
    pub fn new<K, V>(colors: impl IntoIterator<Item = (K, V)>, fallback: &str) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            fallback: fallback.to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self::new(
            [
                ("background", "#222222"),
                ("foreground", "#ffffff"),
                ("primary", "#375a7f"),
                ("secondary", "#444444"),
                ("success", "#00bc8c"),
                ("warning", "#f39c12"),
                ("danger", "#e74c3c"),
                ("info", "#3498db"),
            ],
            "#ffffff",
        )
    }

    pub fn default_light() -> Self {
        Self::new(
            [
                ("background", "#ffffff"),
                ("foreground", "#212529"),
                ("primary", "#2780e3"),
                ("secondary", "#f8f9fa"),
                ("success", "#3fb618"),
                ("warning", "#ff7518"),
                ("danger", "#ff0039"),
                ("info", "#9954bb"),
            ],
            "#212529",
        )
    }

    /// `"light"` selects the light palette; anything else is dark.
    pub fn for_mode(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Self::default_light()
        } else {
            Self::default_dark()
        }
    }

    /// A new palette with `overrides` replacing or adding keys.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, String>) -> Self {
        let mut colors = self.colors.clone();
        colors.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { colors, fallback: self.fallback.clone() }
    }

    pub fn color(&self, key: &str) -> &str {
        self.colors.get(key).map(String::as_str).unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_with_fallback() {
        let palette = ThemePalette::default_dark();
        assert_eq!(palette.color("danger"), "#e74c3c");
        assert_eq!(palette.color("no-such-key"), "#ffffff");
    }

    #[test]
    fn test_overrides_leave_base_untouched() {
        let base = ThemePalette::for_mode("light");
        let overrides = BTreeMap::from([("primary".to_string(), "#123456".to_string())]);
        let custom = base.with_overrides(&overrides);

        assert_eq!(custom.color("primary"), "#123456");
        assert_eq!(custom.color("danger"), "#ff0039");
        assert_eq!(base.color("primary"), "#2780e3");
    }
}
