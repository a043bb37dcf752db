use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::api::types::CodepointSpan;

/// Comparison form of a string plus the original character offset of every
/// normalized character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedString {
  text: String,
  positions: Vec<usize>,
  original_len: usize,
}

impl NormalizedString {
  pub fn as_str(&self) -> &str {
    &self.text
  }

  pub fn positions(&self) -> &[usize] {
    &self.positions
  }

  /// Number of characters in the normalized text.
  pub fn len(&self) -> usize {
    self.positions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Number of characters in the string this was built from.
  pub fn original_len(&self) -> usize {
    self.original_len
  }

  pub fn into_string(self) -> String {
    self.text
  }

  /// Maps a span in normalized characters back onto the original string.
  ///
  /// The result covers every original character that contributed to the span,
  /// including combining marks that trail the last base character.
  pub fn to_original(&self, span: CodepointSpan) -> CodepointSpan {
    if span.len == 0 || span.start >= self.positions.len() {
      let start = self
        .positions
        .get(span.start)
        .copied()
        .unwrap_or(self.original_len);
      return CodepointSpan::new(start, 0);
    }
    let last = usize::min(span.end(), self.positions.len()) - 1;
    let start = self.positions[span.start];
    // Marks stripped after the last base character belong to it.
    let end = self
      .positions
      .get(last + 1)
      .copied()
      .unwrap_or(self.original_len);
    let end = if end == self.positions[last] {
      end + 1
    } else {
      end
    };
    CodepointSpan::new(start, end - start)
  }
}

/// Lowercases, strips diacritics and transliterates Latin letters that have no
/// canonical decomposition, tracking where each output character came from.
pub fn normalize(text: &str) -> NormalizedString {
  let mut out = NormalizedString {
    text: String::with_capacity(text.len()),
    positions: Vec::with_capacity(text.len()),
    original_len: 0,
  };
  for (idx, ch) in text.chars().enumerate() {
    for lower in ch.to_lowercase() {
      decompose_canonical(lower, |c| {
        if is_combining_mark(c) {
          return;
        }
        match transliterate(c) {
          Some(replacement) => {
            for r in replacement.chars() {
              out.text.push(r);
              out.positions.push(idx);
            }
          }
          None => {
            out.text.push(c);
            out.positions.push(idx);
          }
        }
      });
    }
    out.original_len = idx + 1;
  }
  out
}

/// Normalized text only, without the position map.
pub fn normalize_str(text: &str) -> String {
  normalize(text).into_string()
}

fn transliterate(c: char) -> Option<&'static str> {
  let out = match c {
    'ß' => "ss",
    'æ' => "ae",
    'œ' => "oe",
    'ø' => "o",
    'ł' => "l",
    'đ' | 'ð' => "d",
    'þ' => "th",
    'ı' => "i",
    'ŀ' => "l",
    'ħ' => "h",
    'ŧ' => "t",
    _ => return None,
  };
  Some(out)
}
