// Plain-text tree with box-drawing connectors

use crate::tree::Node;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const BLANK: &str = "    ";

/// Render the tree as box-drawing text, root name on the first line
pub fn render_text_tree(root: &Node) -> String {
    let mut out = String::new();
    out.push_str(&root.name);
    out.push('\n');
    render_children(&mut out, root, "");
    out
}

fn render_children(out: &mut String, node: &Node, prefix: &str) {
    let count = node.children.len();

    for (i, child) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;

        out.push_str(prefix);
        out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        out.push_str(&child.name);
        if child.is_dir {
            out.push('/');
        }
        out.push('\n');

        if child.is_dir {
            let extension = if is_last { BLANK } else { CONTINUATION };
            render_children(out, child, &format!("{}{}", prefix, extension));
        }
    }
}
