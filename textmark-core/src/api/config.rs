use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::api::errors::ConfigError;
use crate::api::types::SnippetConfig;

impl SnippetConfig {
  /// Parses a JSON config. Missing sections and fields take their defaults;
  /// templates are validated while parsing.
  pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
    let config: SnippetConfig = serde_json::from_str(data)?;
    config.validate()?;
    Ok(config)
  }

  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let data =
      fs::read_to_string(path).with_context(|| format!("reading snippet config {:?}", path))?;
    Self::from_json_str(&data).with_context(|| format!("parsing snippet config {:?}", path))
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.window.fallback_chars == 0 {
      return Err(ConfigError::Invalid {
        reason: "window.fallback_chars must be positive".into(),
      });
    }
    if self.window.ellipsis.chars().any(char::is_whitespace) {
      return Err(ConfigError::Invalid {
        reason: format!(
          "window.ellipsis `{}` must not contain whitespace",
          self.window.ellipsis
        ),
      });
    }
    Ok(())
  }
}
