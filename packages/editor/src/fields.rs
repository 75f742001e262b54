//! Editor field bindings.
//!
//! The section editor panel is driven by data: each section kind maps to a
//! list of field descriptors (what control to show, under which config
//! key), and every control change writes through to the document as an
//! [`Mutation::UpdateSection`] merge. Values shown in the panel come from
//! the typed defaulted read, so a half-filled config still presents
//! complete, editable values.

use crate::mutations::Mutation;
use focal_model::{
    PortfolioDocument, SectionConfig, SectionId, SectionKind, ThemePreset,
};
use serde::Serialize;
use serde_json::Value;

/// What kind of input control a field needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    LongText,
    Toggle,
    Color,
    Number,
    Select { options: Vec<String> },
    /// Free-form list of short strings (tags, categories, feature lists).
    StringList,
    /// Resolved media URL; upload happens elsewhere.
    Media,
    /// List of structured items edited as sub-forms (gallery images,
    /// service items, package tiers, testimonial entries).
    ItemList,
}

fn select(options: &[&str]) -> FieldKind {
    FieldKind::Select {
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

/// One editable field of a section's configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Config map key the control writes to.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

fn descriptor(key: &'static str, label: &'static str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor { key, label, kind }
}

/// Field catalog for a section kind. Exhaustive: every kind has a handler.
pub fn fields_for(kind: SectionKind) -> Vec<FieldDescriptor> {
    match kind {
        SectionKind::Hero => vec![
            descriptor("heading", "Heading", FieldKind::Text),
            descriptor("tagline", "Tagline", FieldKind::Text),
            descriptor("backgroundImage", "Background image", FieldKind::Media),
            descriptor("alignment", "Alignment", select(&["left", "center", "right"])),
            descriptor("showBookingButton", "Show booking button", FieldKind::Toggle),
            descriptor("buttonLabel", "Button label", FieldKind::Text),
        ],
        SectionKind::Gallery => vec![
            descriptor(
                "layout",
                "Layout",
                select(&["grid", "masonry", "slider", "carousel"]),
            ),
            descriptor("columns", "Columns", select(&["2", "3", "4"])),
            descriptor("spacing", "Spacing", select(&["tight", "normal", "wide"])),
            descriptor("showCaptions", "Show captions", FieldKind::Toggle),
            descriptor("categories", "Categories", FieldKind::StringList),
            descriptor("images", "Images", FieldKind::ItemList),
        ],
        SectionKind::About => vec![
            descriptor("bio", "Bio", FieldKind::LongText),
            descriptor("yearsExperience", "Years of experience", FieldKind::Number),
            descriptor("startingPrice", "Starting price", FieldKind::Text),
            descriptor("services", "Services", FieldKind::StringList),
            descriptor(
                "textAlignment",
                "Text alignment",
                select(&["left", "center", "right"]),
            ),
            descriptor("backgroundColor", "Background color", FieldKind::Color),
        ],
        SectionKind::Services => vec![
            descriptor("heading", "Heading", FieldKind::Text),
            descriptor("items", "Services", FieldKind::ItemList),
            descriptor("showPrices", "Show prices", FieldKind::Toggle),
        ],
        SectionKind::Packages => vec![
            descriptor("heading", "Heading", FieldKind::Text),
            descriptor("tiers", "Package tiers", FieldKind::ItemList),
        ],
        SectionKind::Testimonials => vec![
            descriptor("heading", "Heading", FieldKind::Text),
            descriptor("entries", "Testimonials", FieldKind::ItemList),
        ],
        SectionKind::Reviews => vec![
            descriptor("heading", "Heading", FieldKind::Text),
            descriptor("showRating", "Show star rating", FieldKind::Toggle),
            descriptor("maxCount", "Reviews to show (0 = all)", FieldKind::Number),
        ],
        SectionKind::Contact => vec![
            descriptor("heading", "Heading", FieldKind::Text),
            descriptor("blurb", "Intro text", FieldKind::LongText),
            descriptor("email", "Email", FieldKind::Text),
            descriptor("phone", "Phone", FieldKind::Text),
            descriptor("showSocialLinks", "Show social links", FieldKind::Toggle),
            descriptor("showBookingForm", "Show booking form", FieldKind::Toggle),
        ],
    }
}

/// A descriptor paired with the section's current (defaulted) value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBinding {
    #[serde(flatten)]
    pub descriptor: FieldDescriptor,
    pub value: Value,
}

/// The editing surface for the currently-selected section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorPanel {
    pub section_id: SectionId,
    pub kind: SectionKind,
    pub visible: bool,
    pub fields: Vec<FieldBinding>,
}

impl EditorPanel {
    /// Build the panel for a selection. `None` when the selection no
    /// longer resolves to a section; the host disables its controls
    /// instead of crashing.
    pub fn for_section(doc: &PortfolioDocument, id: &SectionId) -> Option<EditorPanel> {
        let section = doc.section(id)?;
        let effective = SectionConfig::read(section.kind, &section.config).to_map();

        let fields = fields_for(section.kind)
            .into_iter()
            .map(|descriptor| {
                let value = effective
                    .get(descriptor.key)
                    .cloned()
                    .unwrap_or(Value::Null);
                FieldBinding { descriptor, value }
            })
            .collect();

        Some(EditorPanel {
            section_id: id.clone(),
            kind: section.kind,
            visible: section.visible,
            fields,
        })
    }
}

/// Write one config field through to the document immediately.
pub fn set_field(doc: &mut PortfolioDocument, id: &SectionId, key: &str, value: Value) {
    Mutation::set_config_value(id.clone(), key, value).apply(doc);
}

/// Flip a section's visibility. Hidden sections stay in the document.
pub fn set_visibility(doc: &mut PortfolioDocument, id: &SectionId, visible: bool) {
    Mutation::UpdateSection {
        id: id.clone(),
        visible: Some(visible),
        config: None,
    }
    .apply(doc);
}

/// Descriptors for the page-level settings panel.
pub fn global_fields() -> Vec<FieldDescriptor> {
    vec![
        descriptor("primaryColor", "Primary color", FieldKind::Color),
        descriptor("backgroundColor", "Background color", FieldKind::Color),
        descriptor("textColor", "Text color", FieldKind::Color),
        descriptor(
            "buttonStyle",
            "Button style",
            select(&["rounded", "square", "soft"]),
        ),
        descriptor(
            "typography",
            "Typography",
            select(&["modern", "elegant", "bold"]),
        ),
        descriptor(
            "spacing",
            "Spacing",
            select(&["compact", "default", "spacious"]),
        ),
    ]
}

/// Theme presets offered by the preset picker.
pub fn theme_preset_options() -> Vec<&'static str> {
    ThemePreset::ALL.iter().map(|preset| preset.as_str()).collect()
}

/// Write one global-settings field through to the document. Returns false
/// for an unknown key or a value the field cannot hold; the document is
/// left unchanged in that case.
pub fn set_global_field(doc: &mut PortfolioDocument, key: &str, value: Value) -> bool {
    let mut settings = doc.global_settings().clone();

    let applied = match key {
        "primaryColor" => {
            settings.primary_color = color_value(value);
            true
        }
        "backgroundColor" => {
            settings.background_color = color_value(value);
            true
        }
        "textColor" => {
            settings.text_color = color_value(value);
            true
        }
        "buttonStyle" => match serde_json::from_value(value) {
            Ok(style) => {
                settings.button_style = Some(style);
                true
            }
            Err(_) => false,
        },
        "typography" => match serde_json::from_value(value) {
            Ok(typography) => {
                settings.typography = Some(typography);
                true
            }
            Err(_) => false,
        },
        "spacing" => match serde_json::from_value(value) {
            Ok(spacing) => {
                settings.spacing = Some(spacing);
                true
            }
            Err(_) => false,
        },
        "socialLinks" => match serde_json::from_value(value) {
            Ok(links) => {
                settings.social_links = links;
                true
            }
            Err(_) => false,
        },
        _ => false,
    };

    if applied {
        Mutation::UpdateGlobalSettings { settings }.apply(doc);
    }
    applied
}

fn color_value(value: Value) -> Option<String> {
    match value {
        Value::String(color) if !color.is_empty() => Some(color),
        _ => None,
    }
}

/// Switch the theme preset. Takes effect on the next render; the theme
/// resolver is pure, so no refresh call exists or is needed.
pub fn set_theme_preset(doc: &mut PortfolioDocument, preset: ThemePreset) {
    Mutation::SetThemePreset { preset }.apply(doc);
}
