// Self-contained HTML page with collapsible folders

use crate::error::Result;
use crate::output::templates::{escape_html, TemplateEngine};
use crate::tree::Node;

/// Renders the tree into a complete HTML document
pub struct HtmlRenderer {
    template_engine: TemplateEngine,
}

impl HtmlRenderer {
    /// Create a new HTML renderer
    pub fn new() -> Result<Self> {
        Ok(Self {
            template_engine: TemplateEngine::new()?,
        })
    }

    /// Render the full document for `root`
    pub fn render(&self, root: &Node) -> Result<String> {
        let body = render_html_body(root);
        self.template_engine.render_page(&root.name, &body)
    }
}

/// Render the children of `root` as nested `<details>` blocks and file lines
pub fn render_html_body(root: &Node) -> String {
    let mut html = String::new();
    render_children(&mut html, root);
    html
}

fn render_children(html: &mut String, node: &Node) {
    for child in &node.children {
        let name = escape_html(&child.name);
        if child.is_dir {
            html.push_str("<details open>\n");
            html.push_str(&format!("<summary>📁 {}/</summary>\n", name));
            render_children(html, child);
            html.push_str("</details>\n");
        } else {
            html.push_str(&format!("<div class=\"file\">📄 {}</div>\n", name));
        }
    }
}
