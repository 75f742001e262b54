//! The preview renderer.
//!
//! A pure function of `(document, owner, options)`: the theme is resolved
//! once, the document's visible ordered view is walked, and every section
//! renders through the registry. Re-rendering after any mutation is the
//! caller's job; there is no retained state here to invalidate.

use crate::css;
use crate::registry::{definition, RenderContext, RenderMode};
use crate::vdom::{RenderedPage, VNode};
use focal_model::{OwnerProfile, PortfolioDocument, ResolvedTheme, SectionId};

/// Per-render inputs beyond the document itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Section to mark as selected in editing mode.
    pub selected: Option<SectionId>,
}

impl RenderOptions {
    pub fn editing() -> Self {
        Self {
            mode: RenderMode::Editing,
            selected: None,
        }
    }

    pub fn publishing() -> Self {
        Self {
            mode: RenderMode::Publishing,
            selected: None,
        }
    }

    pub fn with_selected(mut self, selected: Option<SectionId>) -> Self {
        self.selected = selected;
        self
    }
}

/// Render the document's visible, ordered sections into a page.
pub fn render(
    doc: &PortfolioDocument,
    owner: &OwnerProfile,
    options: &RenderOptions,
) -> RenderedPage {
    let mode = options.mode;
    let theme = ResolvedTheme::resolve(doc.theme_preset(), doc.global_settings());
    let context = RenderContext {
        mode,
        theme: &theme,
        owner,
        settings: doc.global_settings(),
    };

    let mut page = RenderedPage::new();
    for rule in css::stylesheet(&theme) {
        page.add_style(rule);
    }
    if mode == RenderMode::Editing {
        for rule in css::editing_rules(&theme) {
            page.add_style(rule);
        }
    }

    for section in doc.visible_ordered() {
        let def = definition(section.kind);
        let body = (def.render)(&section.config, &context);

        let node = match mode {
            RenderMode::Editing => {
                let mut shell = VNode::element("div")
                    .with_class("builder-section")
                    .with_attr("data-section-id", section.id.as_str())
                    .with_attr("data-section-kind", section.kind.as_str());
                if options.selected.as_ref() == Some(&section.id) {
                    shell = shell.with_class("builder-section--selected");
                }
                shell
                    .with_child(
                        VNode::element("span")
                            .with_class("builder-section-label")
                            .with_child(VNode::text(def.label)),
                    )
                    .with_child(body)
            }
            RenderMode::Publishing => VNode::element("section")
                .with_class("page-section")
                .with_class(format!("page-section--{}", section.kind.as_str()))
                .with_attr("id", format!("section-{}", section.kind.as_str()))
                .with_child(body),
        };

        page.add_node(node);
    }

    // Published pages carry a single dismissible lightbox overlay; media
    // triggers point at it. No gallery navigation inside.
    if mode == RenderMode::Publishing && !page.nodes.is_empty() {
        page.add_node(
            VNode::element("div")
                .with_class("lightbox-overlay")
                .with_attr("id", "lightbox")
                .with_child(
                    VNode::element("a")
                        .with_class("lightbox-close")
                        .with_attr("href", "#")
                        .with_attr("aria-label", "Close")
                        .with_child(VNode::text("×")),
                )
                .with_child(
                    VNode::element("img")
                        .with_class("lightbox-image")
                        .with_attr("alt", ""),
                ),
        );
    }

    page
}
