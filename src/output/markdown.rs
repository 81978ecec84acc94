// Markdown outline renderer

use crate::tree::Node;

const FOLDER: &str = "📁";
const DOCUMENT: &str = "📄";

/// Render the tree as a nested Markdown list under a bold root line
pub fn render_markdown(root: &Node) -> String {
    let mut md = String::new();
    render_node(&mut md, root, 0);
    md
}

fn render_node(md: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);

    if depth == 0 {
        md.push_str(&format!("{}{} **{}**\n", indent, FOLDER, node.name));
    } else if node.is_dir {
        md.push_str(&format!("{}- {} **{}**\n", indent, FOLDER, node.name));
    } else {
        md.push_str(&format!("{}- {} {}\n", indent, DOCUMENT, node.name));
    }

    for child in &node.children {
        render_node(md, child, depth + 1);
    }
}
