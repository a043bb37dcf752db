//! textmark-core: locate, window and highlight keywords in user-facing text.
//! Matching ignores case and diacritics; output always keeps the original text.

pub mod analysis;
pub mod api;
pub mod query;
pub mod snippet;
pub mod util;

pub use analysis::{normalize, normalize_str, NormalizedString};
pub use api::{
  CodepointSpan, ConfigError, HighlightOptions, HighlightTemplate, MatchMode, MatchSpan, Needles,
  Radius, SnippetConfig, TemplateError, WindowOptions,
};
pub use query::{locate, locate_first, locate_in};
pub use snippet::{
  highlight, highlight_spans, highlight_with, window_around, window_around_with, Snippeter,
};
