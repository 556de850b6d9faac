//! Serialize navigation trees into nested list markup

use super::tree::{compare_nodes, TreeNode};
use crate::helpers::{article_url, html_escape};

/// Settings for navigation markup
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Path prefix for article links
    pub article_root: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            article_root: "/articles".to_string(),
        }
    }
}

/// Render a single node
///
/// Articles become a list item with a link; directories become an open
/// `<details>` block whose children are sorted and rendered recursively.
pub fn render_node(node: &TreeNode, options: &RenderOptions) -> String {
    if node.is_article {
        let href = article_url(&options.article_root, node.id.as_deref().unwrap_or_default());
        return format!(
            r#"<li><a href="{}" data-prefetch>{}</a></li>"#,
            html_escape(&href),
            html_escape(&node.name)
        );
    }

    let mut children: Vec<&TreeNode> = node.children.iter().collect();
    children.sort_by(|a, b| compare_nodes(a, b));

    let children_html: String = children
        .into_iter()
        .map(|child| render_node(child, options))
        .collect();

    format!(
        "<li><details open><summary>{}</summary><ul>{}</ul></details></li>",
        html_escape(&node.name),
        children_html
    )
}

/// Render a whole forest inside a list, sorting the top level first
pub fn render_forest(nodes: &[TreeNode], options: &RenderOptions) -> String {
    let mut nodes: Vec<&TreeNode> = nodes.iter().collect();
    nodes.sort_by(|a, b| compare_nodes(a, b));

    let items: String = nodes
        .into_iter()
        .map(|node| render_node(node, options))
        .collect();

    format!(r#"<ul class="nav-tree">{}</ul>"#, items)
}
