use std::{fmt, str::FromStr};

use thiserror::Error;

/// Local storage key holding the persisted [`Theme`].
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("theme context read outside of a ThemeProvider")]
    MissingProvider,
    #[error("unrecognized theme: {0}")]
    Unrecognized(String),
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to the document root.
    pub fn class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::Unrecognized(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codee::{string::FromToStringCodec, Decoder, Encoder};

    fn encode(theme: Theme) -> String {
        <FromToStringCodec as Encoder<Theme>>::encode(&theme).expect("themes always encode")
    }

    fn decode(stored: &str) -> Result<Theme, ThemeError> {
        <FromToStringCodec as Decoder<Theme>>::decode(stored)
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_storage_codec_strings() {
        assert_eq!(encode(Theme::Dark), "dark");
        assert_eq!(encode(Theme::Light), "light");
        assert_eq!(decode("dark"), Ok(Theme::Dark));
        assert_eq!(decode("light"), Ok(Theme::Light));
    }

    #[test]
    fn test_unparsable_stored_value_falls_back_to_light() {
        for stored in ["", "blue", "\"dark\"", "DARK"] {
            let err = decode(stored).expect_err(stored);
            assert!(matches!(err, ThemeError::Unrecognized(_)));
            // a failed decode leaves storage at its default
            assert_eq!(decode(stored).unwrap_or_default(), Theme::Light);
        }
    }

    #[test]
    fn test_double_toggle_restores_stored_preference() {
        for theme in [Theme::Light, Theme::Dark] {
            let stored = encode(theme);
            assert_ne!(encode(theme.toggled()), stored);
            let restored = theme.toggled().toggled();
            assert_eq!(encode(restored), stored);
            assert_eq!(decode(&encode(restored)), Ok(theme));
        }
    }

    #[test]
    fn test_class() {
        assert_eq!(Theme::Dark.class(), "dark");
        assert_eq!(Theme::Light.class(), "");
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
