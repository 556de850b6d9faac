//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub site_title: String,

    // Content API
    pub space_id: String,
    pub environment: String,
    pub delivery_token: String,
    pub preview_token: String,
    pub preview: bool,
    pub delivery_host: String,
    pub preview_host: String,
    pub content_type: String,

    // URL
    pub article_root: String,

    // Rendering
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Articles".to_string(),

            space_id: String::new(),
            environment: "master".to_string(),
            delivery_token: String::new(),
            preview_token: String::new(),
            preview: false,
            delivery_host: "cdn.contentful.com".to_string(),
            preview_host: "preview.contentful.com".to_string(),
            content_type: "informationArticle".to_string(),

            article_root: "/articles".to_string(),

            markdown: MarkdownConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `_config.yml` from a directory, falling back to defaults
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self, ConfigError> {
        let config_path = base_dir.as_ref().join("_config.yml");
        if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Override settings from `CONTENTFUL_*` environment variables
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Override settings using a custom variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(space) = lookup("CONTENTFUL_SPACE_ID") {
            self.space_id = space;
        }
        if let Some(token) = lookup("CONTENTFUL_DELIVERY_TOKEN") {
            self.delivery_token = token;
        }
        if let Some(token) = lookup("CONTENTFUL_PREVIEW_TOKEN") {
            self.preview_token = token;
        }
        if let Some(env) = lookup("CONTENTFUL_ENVIRONMENT") {
            self.environment = env;
        }
        if let Some(preview) = lookup("CONTENTFUL_PREVIEW") {
            self.preview = matches!(preview.trim(), "1" | "true" | "yes");
        }
    }

    /// API host for the selected mode
    pub fn host(&self) -> &str {
        if self.preview {
            &self.preview_host
        } else {
            &self.delivery_host
        }
    }

    /// Access token for the selected mode
    pub fn access_token(&self) -> &str {
        if self.preview {
            &self.preview_token
        } else {
            &self.delivery_token
        }
    }

    /// Check that the settings needed to reach the content API are present
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.space_id.trim().is_empty() {
            return Err(ConfigError::Missing("space_id"));
        }
        if self.access_token().trim().is_empty() {
            return Err(ConfigError::Missing(if self.preview {
                "preview_token"
            } else {
                "delivery_token"
            }));
        }
        Ok(())
    }
}

/// Markdown rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub gfm: bool,
    pub breaks: bool,
    pub math: bool,
    pub throw_on_error: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            breaks: true,
            math: true,
            throw_on_error: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_type, "informationArticle");
        assert_eq!(config.host(), "cdn.contentful.com");
        assert!(config.markdown.breaks);
        assert!(!config.markdown.throw_on_error);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
space_id: abc123
delivery_token: live
preview_token: draft
preview: true
markdown:
  math: false
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.space_id, "abc123");
        assert_eq!(config.host(), "preview.contentful.com");
        assert_eq!(config.access_token(), "draft");
        assert!(!config.markdown.math);
        assert!(config.markdown.gfm);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "space_id: fromfile\n").unwrap();
        let config = SiteConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.space_id, "fromfile");

        let empty = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(empty.path()).unwrap();
        assert!(config.space_id.is_empty());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CONTENTFUL_SPACE_ID", "envspace"),
            ("CONTENTFUL_PREVIEW_TOKEN", "envpreview"),
            ("CONTENTFUL_PREVIEW", "true"),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::default();
        config.apply_env_from(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.space_id, "envspace");
        assert!(config.preview);
        assert_eq!(config.access_token(), "envpreview");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_token() {
        let mut config = SiteConfig::default();
        config.space_id = "space".to_string();
        match config.validate() {
            Err(ConfigError::Missing(field)) => assert_eq!(field, "delivery_token"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
