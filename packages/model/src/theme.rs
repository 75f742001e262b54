//! Theme presets and the resolution cascade.
//!
//! Resolution is a pure two-layer merge: the preset supplies base tokens,
//! and any explicitly-set [`GlobalSettings`] value overrides the
//! corresponding token one-for-one. `resolve` has no hidden state, so
//! identical inputs always yield deep-equal output.

use crate::settings::{ButtonStyle, GlobalSettings, SpacingScale, Typography};
use serde::{Deserialize, Serialize};

/// Named bundle of default visual tokens, selectable as a starting point
/// before global overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Minimal,
    Dark,
    Elegant,
    Bold,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 4] = [
        ThemePreset::Minimal,
        ThemePreset::Dark,
        ThemePreset::Elegant,
        ThemePreset::Bold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreset::Minimal => "minimal",
            ThemePreset::Dark => "dark",
            ThemePreset::Elegant => "elegant",
            ThemePreset::Bold => "bold",
        }
    }

    /// Base token set supplied by this preset.
    fn base(&self) -> ResolvedTheme {
        match self {
            ThemePreset::Minimal => ResolvedTheme {
                background: "#FFFFFF".to_string(),
                text: "#1A1A1A".to_string(),
                accent: "#2563EB".to_string(),
                button_style: ButtonStyle::Rounded,
                typography: Typography::Modern,
                spacing: SpacingScale::Default,
            },
            ThemePreset::Dark => ResolvedTheme {
                background: "#101014".to_string(),
                text: "#F4F4F5".to_string(),
                accent: "#8B5CF6".to_string(),
                button_style: ButtonStyle::Soft,
                typography: Typography::Modern,
                spacing: SpacingScale::Default,
            },
            ThemePreset::Elegant => ResolvedTheme {
                background: "#FAF7F2".to_string(),
                text: "#2C2A26".to_string(),
                accent: "#A16207".to_string(),
                button_style: ButtonStyle::Soft,
                typography: Typography::Elegant,
                spacing: SpacingScale::Spacious,
            },
            ThemePreset::Bold => ResolvedTheme {
                background: "#0A0A0A".to_string(),
                text: "#FAFAFA".to_string(),
                accent: "#EF4444".to_string(),
                button_style: ButtonStyle::Square,
                typography: Typography::Bold,
                spacing: SpacingScale::Compact,
            },
        }
    }
}

/// The effective token set consumed by every section renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub button_style: ButtonStyle,
    pub typography: Typography,
    pub spacing: SpacingScale,
}

impl ResolvedTheme {
    /// Merge preset base tokens with explicit global overrides.
    ///
    /// A set (non-empty) settings value always wins; an unset field falls
    /// through to the preset token.
    pub fn resolve(preset: ThemePreset, globals: &GlobalSettings) -> Self {
        let mut theme = preset.base();

        if let Some(color) = GlobalSettings::color(&globals.primary_color) {
            theme.accent = color.to_string();
        }
        if let Some(color) = GlobalSettings::color(&globals.background_color) {
            theme.background = color.to_string();
        }
        if let Some(color) = GlobalSettings::color(&globals.text_color) {
            theme.text = color.to_string();
        }
        if let Some(style) = globals.button_style {
            theme.button_style = style;
        }
        if let Some(typography) = globals.typography {
            theme.typography = typography;
        }
        if let Some(spacing) = globals.spacing {
            theme.spacing = spacing;
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_idempotent() {
        let globals = GlobalSettings {
            primary_color: Some("#FF0000".to_string()),
            typography: Some(Typography::Bold),
            ..Default::default()
        };

        for preset in ThemePreset::ALL {
            let first = ResolvedTheme::resolve(preset, &globals);
            let second = ResolvedTheme::resolve(preset, &globals);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_explicit_primary_color_overrides_preset_accent() {
        let globals = GlobalSettings {
            primary_color: Some("#FF0000".to_string()),
            ..Default::default()
        };

        let theme = ResolvedTheme::resolve(ThemePreset::Minimal, &globals);
        assert_eq!(theme.accent, "#FF0000");
        // Untouched tokens keep their preset values.
        assert_eq!(theme.background, "#FFFFFF");
        assert_eq!(theme.button_style, ButtonStyle::Rounded);
    }

    #[test]
    fn test_empty_string_falls_through_to_preset() {
        let globals = GlobalSettings {
            background_color: Some(String::new()),
            ..Default::default()
        };

        let theme = ResolvedTheme::resolve(ThemePreset::Dark, &globals);
        assert_eq!(theme.background, "#101014");
    }

    #[test]
    fn test_every_preset_resolves_without_overrides() {
        let globals = GlobalSettings::default();
        for preset in ThemePreset::ALL {
            let theme = ResolvedTheme::resolve(preset, &globals);
            assert!(theme.background.starts_with('#'));
            assert!(theme.text.starts_with('#'));
            assert!(theme.accent.starts_with('#'));
        }
    }
}
