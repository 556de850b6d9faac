//! Print the navigation tree

use anyhow::Result;
use std::io::Write;

use crate::content::{ArticleRenderer, ContentSource};
use crate::navigation::{self, sort_recursive};
use crate::Articles;

/// Output format for the navigation command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavFormat {
    /// Nested list markup
    Html,
    /// Fully sorted tree as JSON
    Json,
}

/// Write the navigation tree to `out`
pub async fn run<S, R, W>(articles: &Articles<S, R>, format: NavFormat, out: &mut W) -> Result<()>
where
    S: ContentSource,
    R: ArticleRenderer,
    W: Write,
{
    let mut tree = articles.navigation_tree().await?;

    match format {
        NavFormat::Html => {
            let html = navigation::render_forest(&tree, &articles.render_options());
            writeln!(out, "{}", html)?;
        }
        NavFormat::Json => {
            sort_recursive(&mut tree);
            serde_json::to_writer_pretty(&mut *out, &tree)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{Entry, MarkdownRenderer, MemorySource};
    use crate::navigation::TreeNode;

    fn articles() -> Articles<MemorySource, MarkdownRenderer> {
        Articles::with_parts(
            SiteConfig::default(),
            MemorySource::new(vec![
                Entry::new("2", "Zed", "guides"),
                Entry::new("1", "Alpha", "guides"),
            ]),
            MarkdownRenderer::new(),
        )
    }

    #[tokio::test]
    async fn test_html_output() {
        let mut out = Vec::new();
        run(&articles(), NavFormat::Html, &mut out).await.unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("<summary>guides</summary>"));
        assert!(html.find("Alpha").unwrap() < html.find("Zed").unwrap());
    }

    #[tokio::test]
    async fn test_json_output_is_fully_sorted() {
        let mut out = Vec::new();
        run(&articles(), NavFormat::Json, &mut out).await.unwrap();
        let tree: Vec<TreeNode> = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            tree,
            vec![TreeNode::directory_with(
                "guides",
                vec![TreeNode::article("Alpha", "1"), TreeNode::article("Zed", "2")]
            )]
        );
    }
}
