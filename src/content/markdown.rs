//! Markdown rendering with math support

use pulldown_cmark::{html, CowStr, Event, Options, Parser};

use crate::config::MarkdownConfig;
use crate::helpers::html_escape;

/// Math extension settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathOptions {
    /// Let the math engine fail instead of rendering an error span
    pub throw_on_error: bool,
}

/// Options for a markdown render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// GitHub-flavored extensions (tables, strikethrough, task lists, ...)
    pub gfm: bool,
    /// Treat single newlines as hard line breaks
    pub breaks: bool,
    /// Render `$..$` and `$$..$$` math; `None` leaves dollars as text
    pub math: Option<MathOptions>,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            breaks: true,
            math: Some(MathOptions {
                throw_on_error: false,
            }),
        }
    }
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        Self {
            gfm: config.gfm,
            breaks: config.breaks,
            math: config.math.then_some(MathOptions {
                throw_on_error: config.throw_on_error,
            }),
        }
    }
}

/// Turns article markdown into HTML
pub trait ArticleRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}

/// pulldown-cmark based renderer
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: MarkdownOptions,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom settings
    pub fn with_options(options: MarkdownOptions) -> Self {
        Self { options }
    }

    fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.options.gfm {
            options |= Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM;
        }
        if self.options.math.is_some() {
            options |= Options::ENABLE_MATH;
        }
        options
    }

    /// Render markdown to HTML
    pub fn render_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());

        let events = parser.map(|event| match event {
            Event::SoftBreak if self.options.breaks => Event::HardBreak,
            Event::InlineMath(src) => {
                Event::InlineHtml(CowStr::from(self.render_math(&src, false)))
            }
            Event::DisplayMath(src) => {
                Event::InlineHtml(CowStr::from(self.render_math(&src, true)))
            }
            _ => event,
        });

        let mut html_output = String::new();
        html::push_html(&mut html_output, events);
        html_output
    }

    /// Render a math fragment, falling back to inert markup
    fn render_math(&self, src: &str, display: bool) -> String {
        let throw_on_error = self.options.math.map_or(false, |m| m.throw_on_error);

        let rendered = katex::Opts::builder()
            .display_mode(display)
            .throw_on_error(throw_on_error)
            .build()
            .map_err(|e| e.to_string())
            .and_then(|opts| katex::render_with_opts(src, &opts).map_err(|e| e.to_string()));

        match rendered {
            Ok(html) => html,
            Err(e) => {
                tracing::debug!("Math render failed for {:?}: {}", src, e);
                let class = if display {
                    "math math-display"
                } else {
                    "math math-inline"
                };
                format!(r#"<code class="{}">{}</code>"#, class, html_escape(src))
            }
        }
    }
}

impl ArticleRenderer for MarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        self.render_html(markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_single_newline_is_hard_break() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("line one\nline two");
        assert!(html.contains("line one<br />"));

        let soft = MarkdownRenderer::with_options(MarkdownOptions {
            breaks: false,
            ..MarkdownOptions::default()
        });
        assert!(!soft.render("line one\nline two").contains("<br"));
    }

    #[test]
    fn test_gfm_extensions() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_inline_math_uses_katex() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Energy is $E = mc^2$ here.");
        assert!(html.contains("katex"));
        assert!(!html.contains("$E"));
    }

    #[test]
    fn test_malformed_math_does_not_fail() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Broken $x^$ math");
        assert!(html.contains("Broken"));
        assert!(html.contains("katex-error"));
    }

    #[test]
    fn test_math_error_falls_back_to_inert_markup() {
        let renderer = MarkdownRenderer::with_options(MarkdownOptions {
            math: Some(MathOptions {
                throw_on_error: true,
            }),
            ..MarkdownOptions::default()
        });
        let html = renderer.render("Broken $x^$ math");
        assert!(html.contains(r#"<code class="math math-inline">x^</code>"#));
    }

    #[test]
    fn test_math_disabled_keeps_dollars() {
        let renderer = MarkdownRenderer::with_options(MarkdownOptions {
            math: None,
            ..MarkdownOptions::default()
        });
        assert!(renderer.render("costs $5 and $6").contains("$5"));
    }

    #[test]
    fn test_options_from_config() {
        let config = MarkdownConfig {
            math: false,
            ..MarkdownConfig::default()
        };
        let options = MarkdownOptions::from(&config);
        assert!(options.gfm);
        assert!(options.math.is_none());
    }
}
