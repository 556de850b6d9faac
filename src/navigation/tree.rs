//! Tree construction and sibling ordering

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::content::Entry;

/// A directory grouping or a single article in the navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
    pub is_article: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl TreeNode {
    /// An empty directory node
    pub fn directory(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
            is_article: false,
            id: None,
        }
    }

    /// A directory node with children
    pub fn directory_with(name: &str, children: Vec<TreeNode>) -> Self {
        Self {
            children,
            ..Self::directory(name)
        }
    }

    /// An article leaf pointing at an entry id
    pub fn article(name: &str, id: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
            is_article: true,
            id: Some(id.to_string()),
        }
    }

    pub fn is_directory(&self) -> bool {
        !self.is_article
    }
}

/// Split a directory path into segments
///
/// Empty segments (from `""`, `"/a"`, `"a//b"` or `"a/"`) are skipped, so an
/// entry with no directory lands at the root of the forest. Other segments
/// are used verbatim, whitespace included.
fn path_segments(directory: &str) -> impl Iterator<Item = &str> {
    directory.split('/').filter(|segment| !segment.is_empty())
}

/// Fold entries into a forest of directory and article nodes
///
/// Directories are merged by name within their parent; articles are always
/// appended, even when titles collide. Entry order is kept within a level.
pub fn build_tree(entries: &[Entry]) -> Vec<TreeNode> {
    let mut root: Vec<TreeNode> = Vec::new();

    for entry in entries {
        let mut level = &mut root;

        for segment in path_segments(&entry.directory) {
            let pos = match level
                .iter()
                .position(|node| node.is_directory() && node.name == segment)
            {
                Some(pos) => pos,
                None => {
                    level.push(TreeNode::directory(segment));
                    level.len() - 1
                }
            };
            level = &mut level[pos].children;
        }

        level.push(TreeNode::article(&entry.title, &entry.id));
    }

    tracing::debug!("Built navigation tree from {} entries", entries.len());
    root
}

thread_local! {
    static COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!("Falling back to simple name ordering: {}", e);
                None
            }
        };
}

/// Locale-aware name comparison (root collation: accents fold, lowercase first)
fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| b.cmp(a)),
    })
}

/// Directories first, then alphabetical by name
pub fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    a.is_article
        .cmp(&b.is_article)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Order one level of siblings in place
pub fn sort_tree(nodes: &mut [TreeNode]) {
    nodes.sort_by(compare_nodes);
}

/// Order every level of a forest in place
pub fn sort_recursive(nodes: &mut [TreeNode]) {
    sort_tree(nodes);
    for node in nodes.iter_mut() {
        sort_recursive(&mut node.children);
    }
}
