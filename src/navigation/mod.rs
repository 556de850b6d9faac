//! Navigation tree: building, ordering and rendering
//!
//! Entries carry a `/`-delimited `directory` path. [`build_tree`] folds them
//! into a forest of directory and article nodes, [`sort_tree`] orders one
//! level of siblings, and [`render_node`] turns a node into nested list
//! markup, sorting each level as it descends.

mod render;
mod tree;

pub use render::{render_forest, render_node, RenderOptions};
pub use tree::{build_tree, compare_nodes, sort_recursive, sort_tree, TreeNode};
