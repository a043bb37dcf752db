pub mod highlight;
pub mod window;

use tracing::debug;

use crate::analysis::normalizer::normalize;
use crate::api::types::{MatchMode, Needles, SnippetConfig};
use crate::query::locator::locate;

pub use highlight::{highlight, highlight_spans, highlight_with};
pub use window::{truncate_head, window_around, window_around_with, window_at};

/// Applies one [`SnippetConfig`] to many documents.
#[derive(Debug, Clone, Default)]
pub struct Snippeter {
  config: SnippetConfig,
}

impl Snippeter {
  pub fn new(config: SnippetConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &SnippetConfig {
    &self.config
  }

  pub fn window(&self, text: &str, needle: &str) -> String {
    window_around_with(text, needle, &self.config.window)
  }

  pub fn highlight(&self, text: &str, needles: impl Into<Needles>) -> String {
    highlight_with(text, needles, &self.config.highlight)
  }

  /// Windows `text` around the earliest occurrence of any needle, then
  /// highlights all needles inside the window.
  pub fn snippet(&self, text: &str, needles: impl Into<Needles>) -> String {
    let needles = needles.into();
    if needles.is_empty() {
      return text.to_string();
    }
    let window = match locate(&normalize(text), &needles, MatchMode::Exact).first() {
      Some(first) => window_at(text, first.span, &self.config.window),
      None => {
        debug!("no needle found, truncating head");
        truncate_head(
          text,
          self.config.window.fallback_chars,
          &self.config.window.ellipsis,
        )
      }
    };
    highlight_with(&window, &needles, &self.config.highlight)
  }

  /// [`Snippeter::snippet`] for a raw whitespace-separated query.
  pub fn snippet_query(&self, text: &str, query: &str) -> String {
    self.snippet(text, Needles::from_query(query))
  }
}
