use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::deserializers::de_breakpoints;
use crate::breakpoints::BreakpointMap;

/// A theme configuration that may carry its own breakpoint progression.
///
/// A theme whose `breakpoints` are empty resolves media queries against the
/// built-in default progression instead (see
/// [`ThemeLike::effective_breakpoints`](super::ThemeLike::effective_breakpoints)).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "de_breakpoints")]
    pub breakpoints: BreakpointMap,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLock<Theme> =
                LazyLock::new(|| Theme::from_string(include_str!($path)).unwrap());
        )+
    };
}

generate_builtin_themes!(["../../themes/default.json", DEFAULT_THEME]);

impl Theme {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_carries_builtin_breakpoints() {
        let theme = &*DEFAULT_THEME;

        assert!(!theme.name.is_empty(), "Theme should have a name");
        assert_eq!(
            theme.breakpoints.names().collect::<Vec<_>>(),
            ["tablet", "desktop", "lgDesktop"]
        );
    }

    #[test]
    fn test_from_string_keeps_document_order() {
        let theme = Theme::from_string(
            r#"{"breakpoints": {"phone": "375px", "tablet": "768px", "wide": "1440px"}}"#,
        )
        .unwrap();

        assert_eq!(
            theme.breakpoints.names().collect::<Vec<_>>(),
            ["phone", "tablet", "wide"]
        );
    }

    #[test]
    fn test_from_string_defaults_missing_fields() {
        let theme = Theme::from_string("{}").unwrap();

        assert_eq!(theme.name, "");
        assert!(theme.breakpoints.is_empty());
    }

    #[test]
    fn test_from_string_rejects_non_numeric_widths() {
        let error = Theme::from_string(r#"{"breakpoints": {"tablet": "wide"}}"#).unwrap_err();

        assert!(error.to_string().contains("breakpoint 'tablet'"));
    }
}
