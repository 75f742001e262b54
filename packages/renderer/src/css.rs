//! Stylesheet generation from a resolved theme.
//!
//! The theme cascade has already been flattened by the resolver; this
//! module only maps tokens onto CSS declarations plus the static layout
//! rules the section markup relies on.

use crate::vdom::CssRule;
use focal_model::{ButtonStyle, ResolvedTheme, SpacingScale, Typography};

fn font_stack(typography: Typography) -> &'static str {
    match typography {
        Typography::Modern => "'Inter', 'Helvetica Neue', Arial, sans-serif",
        Typography::Elegant => "'Playfair Display', Georgia, serif",
        Typography::Bold => "'Archivo Black', 'Arial Black', sans-serif",
    }
}

fn section_padding(spacing: SpacingScale) -> &'static str {
    match spacing {
        SpacingScale::Compact => "32px 16px",
        SpacingScale::Default => "56px 24px",
        SpacingScale::Spacious => "88px 32px",
    }
}

fn button_radius(style: ButtonStyle) -> &'static str {
    match style {
        ButtonStyle::Rounded => "9999px",
        ButtonStyle::Square => "0",
        ButtonStyle::Soft => "8px",
    }
}

/// Theme-driven plus static layout rules for a rendered page.
pub fn stylesheet(theme: &ResolvedTheme) -> Vec<CssRule> {
    vec![
        CssRule::new(
            "body",
            &[
                ("margin", "0"),
                ("background-color", &theme.background),
                ("color", &theme.text),
                ("font-family", font_stack(theme.typography)),
                ("line-height", "1.6"),
            ],
        ),
        CssRule::new(".page-section", &[("padding", section_padding(theme.spacing))]),
        CssRule::new(".accent", &[("color", &theme.accent)]),
        CssRule::new(
            ".button",
            &[
                ("display", "inline-block"),
                ("padding", "12px 28px"),
                ("background-color", &theme.accent),
                ("color", &theme.background),
                ("border", "none"),
                ("border-radius", button_radius(theme.button_style)),
                ("text-decoration", "none"),
                ("cursor", "pointer"),
            ],
        ),
        CssRule::new(
            ".hero",
            &[
                ("min-height", "60vh"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("justify-content", "center"),
                ("padding", "48px 24px"),
            ],
        ),
        CssRule::new(
            ".gallery-grid",
            &[
                ("display", "grid"),
                (
                    "grid-template-columns",
                    "repeat(var(--gallery-columns, 3), 1fr)",
                ),
            ],
        ),
        CssRule::new(".gallery--gap-tight .gallery-grid", &[("gap", "4px")]),
        CssRule::new(".gallery--gap-normal .gallery-grid", &[("gap", "16px")]),
        CssRule::new(".gallery--gap-wide .gallery-grid", &[("gap", "32px")]),
        CssRule::new(
            ".gallery--masonry .gallery-grid",
            &[("grid-auto-rows", "8px"), ("grid-auto-flow", "dense")],
        ),
        CssRule::new(
            ".gallery--slider .gallery-grid, .gallery--carousel .gallery-grid",
            &[
                ("display", "flex"),
                ("overflow-x", "auto"),
                ("scroll-snap-type", "x mandatory"),
            ],
        ),
        CssRule::new(
            ".gallery-item img",
            &[("width", "100%"), ("display", "block")],
        ),
        CssRule::new(
            ".gallery-filters, .contact-social, .contact-channels, .about-services",
            &[
                ("list-style", "none"),
                ("display", "flex"),
                ("flex-wrap", "wrap"),
                ("gap", "12px"),
                ("padding", "0"),
            ],
        ),
        CssRule::new(
            ".services-grid, .packages-grid",
            &[
                ("display", "grid"),
                ("grid-template-columns", "repeat(auto-fit, minmax(220px, 1fr))"),
                ("gap", "24px"),
            ],
        ),
        CssRule::new(
            ".package-card",
            &[
                ("border", "1px solid rgba(128, 128, 128, 0.3)"),
                ("border-radius", "12px"),
                ("padding", "24px"),
            ],
        ),
        CssRule::new(".package-card--highlighted", &[("border-width", "2px")]),
        CssRule::new(
            ".testimonial",
            &[("margin", "24px 0"), ("font-style", "italic")],
        ),
        CssRule::new(
            ".booking-form",
            &[
                ("display", "grid"),
                ("gap", "12px"),
                ("max-width", "420px"),
            ],
        ),
        CssRule::new(
            ".lightbox-overlay",
            &[
                ("position", "fixed"),
                ("inset", "0"),
                ("display", "none"),
                ("align-items", "center"),
                ("justify-content", "center"),
                ("background", "rgba(0, 0, 0, 0.92)"),
                ("z-index", "100"),
            ],
        ),
        CssRule::new(".lightbox-overlay:target", &[("display", "flex")]),
        CssRule::new(
            ".lightbox-overlay img",
            &[("max-width", "92vw"), ("max-height", "92vh")],
        ),
        CssRule::new(
            ".lightbox-close",
            &[
                ("position", "absolute"),
                ("top", "16px"),
                ("right", "24px"),
                ("color", "#FFFFFF"),
                ("font-size", "32px"),
                ("text-decoration", "none"),
            ],
        ),
    ]
}

/// Extra chrome for the builder preview: selection outlines and the
/// kind badge on each section shell.
pub fn editing_rules(theme: &ResolvedTheme) -> Vec<CssRule> {
    vec![
        CssRule::new(
            ".builder-section",
            &[
                ("position", "relative"),
                ("outline", "1px dashed rgba(128, 128, 128, 0.5)"),
                ("cursor", "pointer"),
            ],
        ),
        CssRule::new(
            ".builder-section--selected",
            &[("outline", &format!("2px solid {}", theme.accent))],
        ),
        CssRule::new(
            ".builder-section-label",
            &[
                ("position", "absolute"),
                ("top", "4px"),
                ("left", "4px"),
                ("padding", "2px 8px"),
                ("font-size", "11px"),
                ("background-color", &theme.accent),
                ("color", &theme.background),
                ("border-radius", "4px"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use focal_model::{GlobalSettings, ThemePreset};

    fn declaration<'a>(rules: &'a [CssRule], selector: &str, key: &str) -> Option<&'a str> {
        rules
            .iter()
            .find(|rule| rule.selector == selector)?
            .declarations
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_stylesheet_carries_theme_tokens() {
        let globals = GlobalSettings {
            primary_color: Some("#FF0000".to_string()),
            ..Default::default()
        };
        let theme = ResolvedTheme::resolve(ThemePreset::Dark, &globals);
        let rules = stylesheet(&theme);

        assert_eq!(declaration(&rules, "body", "background-color"), Some("#101014"));
        assert_eq!(declaration(&rules, ".accent", "color"), Some("#FF0000"));
        assert_eq!(
            declaration(&rules, ".button", "background-color"),
            Some("#FF0000")
        );
    }

    #[test]
    fn test_button_radius_follows_resolved_style() {
        let theme = ResolvedTheme::resolve(ThemePreset::Bold, &GlobalSettings::default());
        let rules = stylesheet(&theme);
        assert_eq!(declaration(&rules, ".button", "border-radius"), Some("0"));
    }

    #[test]
    fn test_editing_rules_highlight_with_accent() {
        let theme = ResolvedTheme::resolve(ThemePreset::Minimal, &GlobalSettings::default());
        let rules = editing_rules(&theme);
        assert_eq!(
            declaration(&rules, ".builder-section--selected", "outline"),
            Some("2px solid #2563EB")
        );
    }
}
