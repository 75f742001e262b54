//! # Focal Renderer
//!
//! Turns a portfolio document into visual output.
//!
//! ## Pipeline
//!
//! ```text
//! PortfolioDocument ──▶ visible_ordered()
//!                          │
//!            ResolvedTheme │ (resolved once per render)
//!                          ▼
//!               section registry ──▶ VNode tree + CssRules
//!                          │
//!                          ▼
//!                  compile_html() ──▶ standalone page
//! ```
//!
//! Rendering is a pure function of `(document, owner, options)`. The
//! editing mode wraps every section in a click-to-select shell; the
//! publishing mode emits the final page with a single-image lightbox
//! overlay for media.

mod css;
mod html;
mod registry;
mod renderer;
mod sections;
mod vdom;

pub use css::{editing_rules, stylesheet};
pub use html::{compile_html, HtmlOptions, PageMeta};
pub use registry::{catalog, definition, RenderContext, RenderFn, RenderMode, SectionDefinition};
pub use renderer::{render, RenderOptions};
pub use vdom::{CssRule, RenderedPage, VNode};
