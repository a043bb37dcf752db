use unicode_segmentation::UnicodeSegmentation;

use crate::api::types::CodepointSpan;

/// Marks, per character, whether a word token starts there.
///
/// A token starts where UAX #29 opens a word segment, or right after any
/// character that is not alphanumeric. The second rule splits `color:black`,
/// `foo.bar`, `l'homme` and `foo_bar`, which UAX #29 keeps whole.
pub fn segment_starts(text: &str) -> Vec<bool> {
  let mut starts = Vec::with_capacity(text.len());
  let mut bounds = text.split_word_bound_indices().map(|(b, _)| b).peekable();
  let mut prev: Option<char> = None;
  for (byte, ch) in text.char_indices() {
    let at_bound = match bounds.peek() {
      Some(&b) if b == byte => {
        bounds.next();
        true
      }
      _ => false,
    };
    starts.push(at_bound || prev.map_or(true, |p| !p.is_alphanumeric()));
    prev = Some(ch);
  }
  starts
}

/// Whitespace-delimited words as character spans.
///
/// Punctuation stays attached to its word so a window never drops a trailing
/// comma or an opening quote.
pub fn word_spans(text: &str) -> Vec<CodepointSpan> {
  let mut spans = Vec::new();
  let mut start: Option<usize> = None;
  let mut count = 0usize;
  for (idx, ch) in text.chars().enumerate() {
    if ch.is_whitespace() {
      if let Some(s) = start.take() {
        spans.push(CodepointSpan::new(s, idx - s));
      }
    } else if start.is_none() {
      start = Some(idx);
    }
    count = idx + 1;
  }
  if let Some(s) = start {
    spans.push(CodepointSpan::new(s, count - s));
  }
  spans
}

/// Splits a free-text query into whitespace-separated terms.
pub fn query_terms(query: &str) -> Vec<String> {
  query.split_whitespace().map(|t| t.to_string()).collect()
}
