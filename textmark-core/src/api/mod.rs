pub mod config;
pub mod errors;
pub mod types;

pub use errors::{ConfigError, TemplateError};
pub use types::{
  CodepointSpan, HighlightOptions, HighlightTemplate, MatchMode, MatchSpan, Needles, Radius,
  SnippetConfig, WindowOptions,
};
