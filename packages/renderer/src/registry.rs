//! Section registry: the static catalog tying each section kind to its
//! default configuration and its render function.
//!
//! The lookup is an exhaustive match over the closed [`SectionKind`]
//! enumeration; there is no "unknown type" code path to fail at runtime,
//! and a kind without a definition simply does not compile.

use crate::sections;
use crate::vdom::VNode;
use focal_model::{
    ConfigMap, GlobalSettings, OwnerProfile, ResolvedTheme, SectionConfig, SectionKind,
};
use serde::{Deserialize, Serialize};

/// Whether the renderer is producing the builder preview or the final
/// published output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Click-to-select shells around each section, no lightbox.
    Editing,
    /// Final output: no selection affordances, media opens in a lightbox.
    Publishing,
}

/// Everything a section renderer may read besides its own configuration.
pub struct RenderContext<'a> {
    pub mode: RenderMode,
    pub theme: &'a ResolvedTheme,
    pub owner: &'a OwnerProfile,
    pub settings: &'a GlobalSettings,
}

/// Pure render function: `(config, context) -> visual output`.
pub type RenderFn = fn(&ConfigMap, &RenderContext) -> VNode;

/// Catalog entry for one section kind.
pub struct SectionDefinition {
    pub kind: SectionKind,
    pub label: &'static str,
    pub render: RenderFn,
}

impl SectionDefinition {
    /// Default configuration for a freshly added section of this kind.
    pub fn default_config(&self) -> ConfigMap {
        SectionConfig::default_for(self.kind).to_map()
    }
}

static HERO: SectionDefinition = SectionDefinition {
    kind: SectionKind::Hero,
    label: "Hero",
    render: sections::render_hero,
};
static GALLERY: SectionDefinition = SectionDefinition {
    kind: SectionKind::Gallery,
    label: "Gallery",
    render: sections::render_gallery,
};
static ABOUT: SectionDefinition = SectionDefinition {
    kind: SectionKind::About,
    label: "About",
    render: sections::render_about,
};
static SERVICES: SectionDefinition = SectionDefinition {
    kind: SectionKind::Services,
    label: "Services",
    render: sections::render_services,
};
static PACKAGES: SectionDefinition = SectionDefinition {
    kind: SectionKind::Packages,
    label: "Packages",
    render: sections::render_packages,
};
static TESTIMONIALS: SectionDefinition = SectionDefinition {
    kind: SectionKind::Testimonials,
    label: "Testimonials",
    render: sections::render_testimonials,
};
static REVIEWS: SectionDefinition = SectionDefinition {
    kind: SectionKind::Reviews,
    label: "Reviews",
    render: sections::render_reviews,
};
static CONTACT: SectionDefinition = SectionDefinition {
    kind: SectionKind::Contact,
    label: "Contact",
    render: sections::render_contact,
};

/// Look up the definition for a section kind.
pub fn definition(kind: SectionKind) -> &'static SectionDefinition {
    match kind {
        SectionKind::Hero => &HERO,
        SectionKind::Gallery => &GALLERY,
        SectionKind::About => &ABOUT,
        SectionKind::Services => &SERVICES,
        SectionKind::Packages => &PACKAGES,
        SectionKind::Testimonials => &TESTIMONIALS,
        SectionKind::Reviews => &REVIEWS,
        SectionKind::Contact => &CONTACT,
    }
}

/// Every definition, in catalog order. Drives "add section" pickers.
pub fn catalog() -> impl Iterator<Item = &'static SectionDefinition> {
    SectionKind::ALL.iter().map(|kind| definition(*kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_is_exhaustive_and_consistent() {
        for kind in SectionKind::ALL {
            let def = definition(kind);
            assert_eq!(def.kind, kind);
            assert!(!def.label.is_empty());
        }
    }

    #[test]
    fn test_default_config_matches_model_defaults() {
        for kind in SectionKind::ALL {
            assert_eq!(
                definition(kind).default_config(),
                SectionConfig::default_for(kind).to_map()
            );
        }
    }

    #[test]
    fn test_catalog_iterates_all_kinds_once() {
        let kinds: Vec<SectionKind> = catalog().map(|def| def.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
    }
}
