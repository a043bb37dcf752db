use serde::{Deserialize, Serialize};

use crate::api::errors::TemplateError;

/// Words kept on each side of a match when no radius is configured.
pub const DEFAULT_CONTEXT_WORDS: usize = 10;
/// Length, in characters, of the head-truncated fallback window.
pub const DEFAULT_FALLBACK_CHARS: usize = 200;
pub const DEFAULT_ELLIPSIS: &str = "..";
pub const DEFAULT_TEMPLATE: &str = "<b>{}</b>";

/// A `(start, len)` range over the characters of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CodepointSpan {
  pub start: usize,
  pub len: usize,
}

impl CodepointSpan {
  pub fn new(start: usize, len: usize) -> Self {
    Self { start, len }
  }

  pub fn end(&self) -> usize {
    self.start + self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}

/// A located span together with the index of the needle that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
  pub span: CodepointSpan,
  pub needle: usize,
}

impl MatchSpan {
  pub fn new(start: usize, len: usize, needle: usize) -> Self {
    Self {
      span: CodepointSpan::new(start, len),
      needle,
    }
  }

  pub fn start(&self) -> usize {
    self.span.start
  }

  pub fn end(&self) -> usize {
    self.span.end()
  }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
  /// Needle occurs anywhere as a contiguous substring.
  Exact,
  /// Needle starts at a word boundary and may stop inside a word.
  #[default]
  Stem,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
  Words(usize),
  Chars(usize),
}

impl Radius {
  pub fn size(&self) -> usize {
    match self {
      Radius::Words(n) | Radius::Chars(n) => *n,
    }
  }
}

impl Default for Radius {
  fn default() -> Self {
    Radius::Words(DEFAULT_CONTEXT_WORDS)
  }
}

/// Search terms. Always a sequence; a single term is a sequence of one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Needles {
  terms: Vec<String>,
}

impl Needles {
  pub fn one(term: impl Into<String>) -> Self {
    Self {
      terms: vec![term.into()],
    }
  }

  /// Splits a raw query string on whitespace, one needle per term.
  pub fn from_query(query: &str) -> Self {
    Self {
      terms: crate::analysis::tokenizer::query_terms(query),
    }
  }

  pub fn terms(&self) -> &[String] {
    &self.terms
  }

  /// True when no term has any non-whitespace content.
  pub fn is_empty(&self) -> bool {
    self.terms.iter().all(|t| t.trim().is_empty())
  }
}

impl<S: Into<String>> FromIterator<S> for Needles {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self {
      terms: iter.into_iter().map(Into::into).collect(),
    }
  }
}

impl From<&str> for Needles {
  fn from(term: &str) -> Self {
    Needles::one(term)
  }
}

impl From<String> for Needles {
  fn from(term: String) -> Self {
    Needles::one(term)
  }
}

impl From<&String> for Needles {
  fn from(term: &String) -> Self {
    Needles::one(term.as_str())
  }
}

impl From<&[&str]> for Needles {
  fn from(terms: &[&str]) -> Self {
    terms.iter().copied().collect()
  }
}

impl<const N: usize> From<[&str; N]> for Needles {
  fn from(terms: [&str; N]) -> Self {
    terms.into_iter().collect()
  }
}

impl From<Vec<String>> for Needles {
  fn from(terms: Vec<String>) -> Self {
    Self { terms }
  }
}

impl From<&[String]> for Needles {
  fn from(terms: &[String]) -> Self {
    terms.iter().cloned().collect()
  }
}

impl From<&Needles> for Needles {
  fn from(needles: &Needles) -> Self {
    needles.clone()
  }
}

/// Markup wrapped around each highlighted match. `{}` marks where the matched
/// text goes; `{{` and `}}` are literal braces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HighlightTemplate {
  source: String,
  prefix: String,
  suffix: String,
}

impl HighlightTemplate {
  pub fn new(template: &str) -> Result<Self, TemplateError> {
    let mut prefix = String::new();
    let mut suffix = String::new();
    let mut placeholders = 0usize;
    let mut chars = template.char_indices().peekable();
    while let Some((offset, ch)) = chars.next() {
      let out = if placeholders == 0 {
        &mut prefix
      } else {
        &mut suffix
      };
      match ch {
        '{' => match chars.peek() {
          Some((_, '{')) => {
            chars.next();
            out.push('{');
          }
          Some((_, '}')) => {
            chars.next();
            placeholders += 1;
          }
          _ => {
            return Err(TemplateError::UnbalancedBrace {
              template: template.to_string(),
              brace: '{',
              offset,
            })
          }
        },
        '}' => match chars.peek() {
          Some((_, '}')) => {
            chars.next();
            out.push('}');
          }
          _ => {
            return Err(TemplateError::UnbalancedBrace {
              template: template.to_string(),
              brace: '}',
              offset,
            })
          }
        },
        other => out.push(other),
      }
    }
    match placeholders {
      0 => Err(TemplateError::MissingPlaceholder {
        template: template.to_string(),
      }),
      1 => Ok(Self {
        source: template.to_string(),
        prefix,
        suffix,
      }),
      count => Err(TemplateError::MultiplePlaceholders {
        template: template.to_string(),
        count,
      }),
    }
  }

  /// Text emitted before the match.
  pub fn prefix(&self) -> &str {
    &self.prefix
  }

  /// Text emitted after the match.
  pub fn suffix(&self) -> &str {
    &self.suffix
  }

  /// Appends `matched` wrapped in the template to `out`.
  pub fn render_into(&self, out: &mut String, matched: &str) {
    out.push_str(&self.prefix);
    out.push_str(matched);
    out.push_str(&self.suffix);
  }
}

impl Default for HighlightTemplate {
  fn default() -> Self {
    Self {
      source: DEFAULT_TEMPLATE.to_string(),
      prefix: "<b>".to_string(),
      suffix: "</b>".to_string(),
    }
  }
}

impl TryFrom<String> for HighlightTemplate {
  type Error = TemplateError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    HighlightTemplate::new(&value)
  }
}

impl TryFrom<&str> for HighlightTemplate {
  type Error = TemplateError;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    HighlightTemplate::new(value)
  }
}

impl From<HighlightTemplate> for String {
  fn from(template: HighlightTemplate) -> Self {
    template.source
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowOptions {
  pub radius: Radius,
  /// Marker added on each side where text was cut away.
  pub ellipsis: String,
  /// Maximum length of the head-truncated text used when the needle is absent.
  pub fallback_chars: usize,
}

impl WindowOptions {
  pub fn words(n: usize) -> Self {
    Self {
      radius: Radius::Words(n),
      ..Self::default()
    }
  }

  pub fn chars(n: usize) -> Self {
    Self {
      radius: Radius::Chars(n),
      ..Self::default()
    }
  }
}

impl Default for WindowOptions {
  fn default() -> Self {
    Self {
      radius: Radius::default(),
      ellipsis: DEFAULT_ELLIPSIS.to_string(),
      fallback_chars: DEFAULT_FALLBACK_CHARS,
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct HighlightOptions {
  pub template: HighlightTemplate,
  pub mode: MatchMode,
}

impl HighlightOptions {
  pub fn with_template(template: HighlightTemplate) -> Self {
    Self {
      template,
      ..Self::default()
    }
  }
}

/// Window and highlight settings, typically loaded once from JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SnippetConfig {
  pub window: WindowOptions,
  pub highlight: HighlightOptions,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn render(tpl: &HighlightTemplate, matched: &str) -> String {
    let mut out = String::new();
    tpl.render_into(&mut out, matched);
    out
  }

  #[test]
  fn template_splits_around_placeholder() {
    let tpl = HighlightTemplate::new("<mark class=\"hit\">{}</mark>").unwrap();
    assert_eq!(tpl.prefix(), "<mark class=\"hit\">");
    assert_eq!(tpl.suffix(), "</mark>");
    assert_eq!(render(&tpl, "x"), "<mark class=\"hit\">x</mark>");
  }

  #[test]
  fn template_escaped_braces_are_literal() {
    let tpl = HighlightTemplate::new("{{{}}}").unwrap();
    assert_eq!(render(&tpl, "a"), "{a}");
  }

  #[test]
  fn template_rejects_bad_placeholder_counts() {
    assert!(matches!(
      HighlightTemplate::new("<b></b>"),
      Err(TemplateError::MissingPlaceholder { .. })
    ));
    assert!(matches!(
      HighlightTemplate::new("{}-{}"),
      Err(TemplateError::MultiplePlaceholders { count: 2, .. })
    ));
    assert!(matches!(
      HighlightTemplate::new("<b>{x}</b>"),
      Err(TemplateError::UnbalancedBrace {
        brace: '{',
        offset: 3,
        ..
      })
    ));
  }

  #[test]
  fn default_template_matches_constant() {
    let parsed = HighlightTemplate::new(DEFAULT_TEMPLATE).unwrap();
    assert_eq!(parsed, HighlightTemplate::default());
  }

  #[test]
  fn needles_from_conversions() {
    assert_eq!(Needles::from("foo").terms(), &["foo".to_string()]);
    assert_eq!(Needles::from(["a", "b"]).terms().len(), 2);
    assert_eq!(Needles::from_query("  lorem  ipsum ").terms().len(), 2);
    assert!(Needles::from(" ").is_empty());
    assert!(Needles::default().is_empty());
  }

  #[test]
  fn radius_serializes_with_unit_tag() {
    let json = serde_json::to_string(&Radius::Chars(4)).unwrap();
    assert_eq!(json, r#"{"chars":4}"#);
    let back: Radius = serde_json::from_str(r#"{"words":3}"#).unwrap();
    assert_eq!(back, Radius::Words(3));
  }
}
