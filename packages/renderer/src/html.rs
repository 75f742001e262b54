//! Compile a rendered page to a standalone HTML document.

use crate::vdom::{CssRule, RenderedPage, VNode};

/// Head metadata for the compiled document.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }
}

/// Options for HTML output.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print with indentation.
    pub pretty: bool,
    /// Indentation string.
    pub indent: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: HtmlOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a rendered page into a full HTML5 document with an inline
/// stylesheet.
pub fn compile_html(page: &RenderedPage, meta: &PageMeta, options: HtmlOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    compile_head(page, meta, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    for node in &page.nodes {
        compile_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(page: &RenderedPage, meta: &PageMeta, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&meta.title)));
    if !meta.description.is_empty() {
        ctx.add_line(&format!(
            "<meta name=\"description\" content=\"{}\">",
            escape_html(&meta.description)
        ));
    }

    if !page.styles.is_empty() {
        ctx.add_line("<style>");
        ctx.indent();
        for rule in &page.styles {
            compile_rule(rule, ctx);
        }
        ctx.dedent();
        ctx.add_line("</style>");
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_rule(rule: &CssRule, ctx: &mut Context) {
    let body: Vec<String> = rule
        .declarations
        .iter()
        .map(|(key, value)| format!("{}: {};", key, value))
        .collect();
    ctx.add_line(&format!("{} {{ {} }}", rule.selector, body.join(" ")));
}

fn compile_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => {
            ctx.add_line(&escape_html(content));
        }
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<{}", tag));

            for (name, value) in attributes {
                ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
            }

            if !styles.is_empty() {
                let inline: Vec<String> = styles
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect();
                ctx.add(&format!(" style=\"{}\"", escape_html(&inline.join("; "))));
            }

            if children.is_empty() && is_void_tag(tag) {
                ctx.add(">");
                if ctx.options.pretty {
                    ctx.add("\n");
                }
                return;
            }

            ctx.add(">");

            if !children.is_empty() {
                if ctx.options.pretty {
                    ctx.add("\n");
                }
                ctx.indent();
                for child in children {
                    compile_node(child, ctx);
                }
                ctx.dedent();
                if ctx.options.pretty {
                    ctx.add_indent();
                }
            }

            ctx.add(&format!("</{}>", tag));
            if ctx.options.pretty {
                ctx.add("\n");
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::CssRule;

    #[test]
    fn test_escapes_text_and_attributes() {
        let mut page = RenderedPage::new();
        page.add_node(
            VNode::element("p")
                .with_attr("title", "a \"quoted\" <value>")
                .with_child(VNode::text("Fish & chips <b>not bold</b>")),
        );

        let html = compile_html(&page, &PageMeta::new("T"), HtmlOptions::default());
        assert!(html.contains("Fish &amp; chips &lt;b&gt;not bold&lt;/b&gt;"));
        assert!(html.contains("title=\"a &quot;quoted&quot; &lt;value&gt;\""));
    }

    #[test]
    fn test_void_tags_have_no_closing_tag() {
        let mut page = RenderedPage::new();
        page.add_node(VNode::element("img").with_attr("src", "a.jpg"));

        let html = compile_html(&page, &PageMeta::new("T"), HtmlOptions::default());
        assert!(html.contains("<img src=\"a.jpg\">"));
        assert!(!html.contains("</img>"));
    }

    #[test]
    fn test_inline_styles_are_rendered() {
        let mut page = RenderedPage::new();
        page.add_node(
            VNode::element("div")
                .with_style("color", "#fff")
                .with_style("background-color", "#000")
                .with_child(VNode::text("x")),
        );

        let html = compile_html(&page, &PageMeta::new("T"), HtmlOptions::default());
        assert!(html.contains("style=\"background-color: #000; color: #fff\""));
    }

    #[test]
    fn test_stylesheet_lands_in_head() {
        let mut page = RenderedPage::new();
        page.add_style(CssRule::new("body", &[("margin", "0")]));

        let html = compile_html(&page, &PageMeta::new("T"), HtmlOptions::default());
        assert!(html.contains("<style>"));
        assert!(html.contains("body { margin: 0; }"));
    }

    #[test]
    fn test_compact_output_without_pretty() {
        let mut page = RenderedPage::new();
        page.add_node(VNode::element("div").with_child(VNode::text("x")));

        let html = compile_html(
            &page,
            &PageMeta::new("T"),
            HtmlOptions {
                pretty: false,
                indent: String::new(),
            },
        );
        assert!(html.contains("<div>x</div>"));
        assert!(!html.contains('\n'));
    }
}
