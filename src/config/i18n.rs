//! Internationalization types and the translation extraction marker.

use serde::{Deserialize, Serialize};

/// A supported interface language as a (code, display name) pair.
///
/// The default language must not appear in the supported-language list;
/// `Config::validate` enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// ISO 639-1 language code (e.g. "fr")
    pub code: String,
    /// English display name shown in the language switcher
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Identity marker for translatable strings.
///
/// Has no runtime effect; the translations extractor scans for call sites
/// of this function to build the message catalog.
pub const fn gettext(s: &'static str) -> &'static str {
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gettext_is_identity() {
        assert_eq!(gettext(""), "");
        assert_eq!(gettext("Lectern"), "Lectern");
        assert_eq!(gettext("Wélcome, bïenvenue"), "Wélcome, bïenvenue");
    }

    #[test]
    fn test_language_pair() {
        let fr = Language::new("fr", "French");
        assert_eq!(fr.code, "fr");
        assert_eq!(fr.name, "French");
    }
}
