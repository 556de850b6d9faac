//! articles-rs: articles from a hosted content API, rendered for a website
//!
//! This crate fetches article entries, renders their markdown (with math)
//! to HTML, and assembles the site's navigation tree from each entry's
//! `directory` path.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod navigation;
pub mod server;

use anyhow::{Context, Result};
use std::path::Path;

use content::{ArticleRenderer, ContentSource, DeliveryClient, EntryQuery, MarkdownRenderer};
use navigation::{RenderOptions, TreeNode};

/// Fields requested when only navigation data is needed
const NAVIGATION_FIELDS: [&str; 3] = ["sys.id", "fields.title", "fields.directory"];

/// Largest page the delivery API returns; its default is 100
pub const NAVIGATION_LIMIT: usize = 1000;

/// The main application: a content source plus a markdown renderer
pub struct Articles<S = DeliveryClient, R = MarkdownRenderer> {
    /// Site configuration
    pub config: config::SiteConfig,
    source: S,
    renderer: R,
}

impl Articles {
    /// Create an instance from a directory holding `_config.yml`
    ///
    /// `CONTENTFUL_*` environment variables override file settings.
    pub fn new<P: AsRef<Path>>(base_dir: P, preview: bool) -> Result<Self> {
        let mut config = config::SiteConfig::load_or_default(base_dir)?;
        config.apply_env();
        if preview {
            config.preview = true;
        }
        Self::from_config(config)
    }

    /// Wire the delivery client and markdown renderer from config
    pub fn from_config(config: config::SiteConfig) -> Result<Self> {
        config.validate().context("Incomplete content API settings")?;

        let source = DeliveryClient::from_config(&config);
        let renderer = MarkdownRenderer::with_options((&config.markdown).into());
        tracing::debug!(
            "Using content host {} (preview: {})",
            config.host(),
            config.preview
        );

        Ok(Self {
            config,
            source,
            renderer,
        })
    }
}

impl<S: ContentSource, R: ArticleRenderer> Articles<S, R> {
    /// Create with explicit collaborators
    pub fn with_parts(config: config::SiteConfig, source: S, renderer: R) -> Self {
        Self {
            config,
            source,
            renderer,
        }
    }

    /// Rendered HTML for one article, or an empty string if the id does not
    /// match exactly one entry
    pub async fn article_content(&self, id: &str) -> Result<String> {
        let query = EntryQuery::new(&self.config.content_type).with_id(id);
        let entries = self
            .source
            .entries(&query)
            .await
            .with_context(|| format!("Failed to fetch article {}", id))?;

        match entries.as_slice() {
            [entry] => Ok(self.renderer.render(&entry.article_content)),
            _ => {
                tracing::warn!("Article {} matched {} entries", id, entries.len());
                Ok(String::new())
            }
        }
    }

    /// Navigation forest with its top level sorted
    pub async fn navigation_tree(&self) -> Result<Vec<TreeNode>> {
        let query = EntryQuery::new(&self.config.content_type)
            .select(NAVIGATION_FIELDS)
            .limit(NAVIGATION_LIMIT);
        let entries = self
            .source
            .entries(&query)
            .await
            .context("Failed to fetch navigation entries")?;

        let mut tree = navigation::build_tree(&entries);
        navigation::sort_tree(&mut tree);
        Ok(tree)
    }

    /// Navigation markup for page layouts
    pub async fn navigation_html(&self) -> Result<String> {
        let tree = self.navigation_tree().await?;
        Ok(navigation::render_forest(&tree, &self.render_options()))
    }

    /// Render options derived from config
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            article_root: self.config.article_root.clone(),
        }
    }
}
