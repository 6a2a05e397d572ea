//! Theme tokens, the fixed set of visual presets the console can apply.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A named visual preset applied to the whole console.
///
/// `System` is the default and defers to the operating system's color
/// scheme; every other token names a stylesheet theme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Bumblebee,
    Nord,
    Emerald,
    Autumn,
    Dark,
}

impl Theme {
    /// Every token, in the order the selector lists them.
    pub const ALL: [Theme; 6] = [
        Theme::System,
        Theme::Bumblebee,
        Theme::Nord,
        Theme::Emerald,
        Theme::Autumn,
        Theme::Dark,
    ];

    /// Stable token string (`"nord"`, `"dark"`, …).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Bumblebee => "bumblebee",
            Self::Nord => "nord",
            Self::Emerald => "emerald",
            Self::Autumn => "autumn",
            Self::Dark => "dark",
        }
    }

    /// Human-readable label shown in the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::System => "系统",
            Self::Bumblebee => "大黄蜂",
            Self::Nord => "北方",
            Self::Emerald => "翠",
            Self::Autumn => "秋季",
            Self::Dark => "暗黑",
        }
    }

    /// Value for the document's `data-theme` attribute.
    ///
    /// `None` means the attribute must be removed so the stylesheet falls
    /// back to `prefers-color-scheme`.
    #[must_use]
    pub const fn data_theme(self) -> Option<&'static str> {
        match self {
            Self::System => None,
            other => Some(other.token()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.token() == s)
            .ok_or_else(|| ValidationError::UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_system() {
        assert_eq!(Theme::default(), Theme::System);
    }

    #[test]
    fn should_list_six_distinct_tokens() {
        let mut tokens: Vec<_> = Theme::ALL.iter().map(|t| t.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn should_parse_every_token_back() {
        for theme in Theme::ALL {
            assert_eq!(theme.token().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn should_reject_unknown_token() {
        let result = "pink".parse::<Theme>();
        assert_eq!(result, Err(ValidationError::UnknownTheme("pink".into())));
    }

    #[test]
    fn should_reject_token_with_different_case() {
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn should_not_set_data_theme_for_system() {
        assert_eq!(Theme::System.data_theme(), None);
        assert_eq!(Theme::Nord.data_theme(), Some("nord"));
    }

    #[test]
    fn should_serialize_as_lowercase_token() {
        let json = serde_json::to_string(&Theme::Bumblebee).unwrap();
        assert_eq!(json, "\"bumblebee\"");
    }
}
