//! CLI command implementations

pub mod article;
pub mod nav;
