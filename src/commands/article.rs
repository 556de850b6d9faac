//! Print a rendered article

use anyhow::Result;
use std::io::Write;

use crate::content::{ArticleRenderer, ContentSource};
use crate::Articles;

/// Write the rendered HTML for `id` to `out`
///
/// Nothing is written when the id does not resolve to exactly one article.
pub async fn run<S, R, W>(articles: &Articles<S, R>, id: &str, out: &mut W) -> Result<()>
where
    S: ContentSource,
    R: ArticleRenderer,
    W: Write,
{
    let html = articles.article_content(id).await?;
    if html.is_empty() {
        tracing::warn!("No unique article found for id {}", id);
        return Ok(());
    }
    out.write_all(html.as_bytes())?;
    Ok(())
}
