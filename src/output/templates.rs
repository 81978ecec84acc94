// Template engine for the HTML page shell

use crate::error::Result;
use tera::{Context, Tera};

const PAGE_TEMPLATE: &str = "tree.html";

/// Tera wrapper holding the embedded page template
///
/// Auto-escaping uses [`escape_html`], so only `&`, `<` and `>` are
/// replaced in interpolated values.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create a new template engine with the embedded page template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, include_str!("../../templates/tree.html.tera"))?;
        tera.set_escape_fn(escape_html);

        Ok(Self { tera })
    }

    /// Render the full page around an already-escaped body
    pub fn render_page(&self, root_name: &str, body: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("root_name", root_name);
        context.insert("body", body);

        Ok(self.tera.render(PAGE_TEMPLATE, &context)?)
    }
}

/// Escape text for HTML content; ampersands go first so entities are not doubled
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
