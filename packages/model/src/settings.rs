//! Global page settings: the owner-chosen overrides layered on top of the
//! selected theme preset. Every field is optional; an unset (or empty
//! string) value falls through to the preset token during resolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Rounded,
    Square,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Typography {
    #[default]
    Modern,
    Elegant,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpacingScale {
    Compact,
    #[default]
    Default,
    Spacious,
}

/// Owner-level style and contact settings for the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub primary_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub button_style: Option<ButtonStyle>,
    pub typography: Option<Typography>,
    pub spacing: Option<SpacingScale>,

    /// Named channel → URL or phone string. Sorted map keeps rendered
    /// output stable.
    pub social_links: BTreeMap<String, String>,
}

impl GlobalSettings {
    /// A color override only wins when it is actually set to something.
    pub(crate) fn color(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }
}
