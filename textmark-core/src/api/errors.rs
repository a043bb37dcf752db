use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
  #[error("highlight template `{template}` has no `{{}}` placeholder")]
  MissingPlaceholder { template: String },

  #[error("highlight template `{template}` has {count} placeholders (expected exactly one)")]
  MultiplePlaceholders { template: String, count: usize },

  #[error("highlight template `{template}` has an unmatched `{brace}` at offset {offset}")]
  UnbalancedBrace {
    template: String,
    brace: char,
    offset: usize,
  },
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("parsing snippet config: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("invalid snippet config: {reason}")]
  Invalid { reason: String },
}
