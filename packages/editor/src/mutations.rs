//! Semantic mutations over a portfolio document.
//!
//! Every edit the builder performs, from adding a block to switching the
//! theme preset, is expressed as one of these operations, so edits can be
//! logged and replayed as data.

use focal_model::{
    ConfigMap, GlobalSettings, PortfolioDocument, SectionId, SectionKind, SectionPatch,
    ThemePreset,
};
use serde::{Deserialize, Serialize};

/// One semantic editing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Append a new section of the given kind with its default config.
    AddSection { kind: SectionKind },

    /// Remove a section; remaining orders are renumbered to close the gap.
    RemoveSection { id: SectionId },

    /// Merge config keys and/or set visibility on one section.
    UpdateSection {
        id: SectionId,
        #[serde(default)]
        visible: Option<bool>,
        #[serde(default)]
        config: Option<ConfigMap>,
    },

    /// Relocate the section at `from` to position `to` (splice semantics).
    MoveSection { from: usize, to: usize },

    /// Select a different theme preset.
    SetThemePreset { preset: ThemePreset },

    /// Replace the global settings wholesale. The field layer produces a
    /// merged copy, so a single-field edit still arrives as one of these.
    UpdateGlobalSettings { settings: GlobalSettings },
}

impl Mutation {
    /// Convenience constructor for a single-field config write.
    pub fn set_config_value(
        id: SectionId,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        let mut config = ConfigMap::new();
        config.insert(key.into(), value);
        Mutation::UpdateSection {
            id,
            visible: None,
            config: Some(config),
        }
    }

    /// Apply this mutation to the document.
    ///
    /// Total: operations naming an unknown section id or an out-of-range
    /// position are no-ops. Returns the id of a newly added section so the
    /// caller can select it.
    pub fn apply(&self, doc: &mut PortfolioDocument) -> Option<SectionId> {
        match self {
            Mutation::AddSection { kind } => {
                let id = doc.add_section(*kind).id.clone();
                Some(id)
            }
            Mutation::RemoveSection { id } => {
                doc.remove_section(id);
                None
            }
            Mutation::UpdateSection {
                id,
                visible,
                config,
            } => {
                doc.update_section(
                    id,
                    SectionPatch {
                        visible: *visible,
                        config: config.clone(),
                    },
                );
                None
            }
            Mutation::MoveSection { from, to } => {
                doc.move_section(*from, *to);
                None
            }
            Mutation::SetThemePreset { preset } => {
                doc.set_theme_preset(*preset);
                None
            }
            Mutation::UpdateGlobalSettings { settings } => {
                doc.set_global_settings(settings.clone());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization_round_trip() {
        let mutation = Mutation::set_config_value(
            SectionId::new("sec-123"),
            "heading",
            serde_json::json!("Weddings"),
        );

        let json = serde_json::to_string(&mutation).unwrap();
        let back: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, back);
    }

    #[test]
    fn test_add_returns_the_new_section_id() {
        let mut doc = PortfolioDocument::new("owner-1");
        let id = Mutation::AddSection {
            kind: SectionKind::Hero,
        }
        .apply(&mut doc)
        .unwrap();

        assert_eq!(doc.section(&id).unwrap().kind, SectionKind::Hero);
    }

    #[test]
    fn test_mutations_on_unknown_ids_are_no_ops() {
        let mut doc = PortfolioDocument::starter("owner-1");
        let before = doc.clone();

        Mutation::RemoveSection {
            id: SectionId::new("sec-gone"),
        }
        .apply(&mut doc);
        Mutation::set_config_value(SectionId::new("sec-gone"), "x", serde_json::json!(1))
            .apply(&mut doc);

        assert_eq!(doc, before);
    }
}
