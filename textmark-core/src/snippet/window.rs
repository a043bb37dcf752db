use tracing::debug;

use crate::analysis::normalizer::normalize;
use crate::analysis::tokenizer::word_spans;
use crate::api::types::{CodepointSpan, MatchMode, Radius, WindowOptions};
use crate::query::locator::locate_first;
use crate::util::offsets::CharOffsets;

/// Cuts `text` down to `context_words` whole words on each side of the first
/// occurrence of `needle`.
///
/// Matching ignores case and diacritics. When the needle does not occur the
/// head of the text is returned instead, truncated on a word boundary.
pub fn window_around(text: &str, needle: &str, context_words: usize) -> String {
  window_around_with(text, needle, &WindowOptions::words(context_words))
}

pub fn window_around_with(text: &str, needle: &str, opts: &WindowOptions) -> String {
  if opts.radius.size() == 0 || needle.trim().is_empty() {
    return text.to_string();
  }
  let norm = normalize(text);
  match locate_first(&norm, needle, MatchMode::Exact) {
    Some(found) => window_at(text, found.span, opts),
    None => {
      debug!(needle, "needle not found, truncating head");
      truncate_head(text, opts.fallback_chars, &opts.ellipsis)
    }
  }
}

/// Window around a span already located in `text` (original coordinates).
pub fn window_at(text: &str, span: CodepointSpan, opts: &WindowOptions) -> String {
  match opts.radius {
    Radius::Words(0) | Radius::Chars(0) => text.to_string(),
    Radius::Words(n) => words_around(text, span, n, &opts.ellipsis),
    Radius::Chars(n) => chars_around(text, span, n, &opts.ellipsis),
  }
}

fn words_around(text: &str, span: CodepointSpan, radius: usize, ellipsis: &str) -> String {
  let words = word_spans(text);
  let first = words.iter().position(|w| w.end() > span.start);
  let last = words.iter().rposition(|w| w.start < span.end());
  let (Some(first), Some(last)) = (first, last) else {
    return text.to_string();
  };
  let from = first.saturating_sub(radius);
  let to = usize::min(last.saturating_add(radius), words.len() - 1);
  if from == 0 && to == words.len() - 1 {
    return text.to_string();
  }
  let left = from > 0;
  let right = to < words.len() - 1;
  // an untrimmed side keeps its surrounding whitespace
  let start = if left { words[from].start } else { 0 };
  let end = if right {
    words[to].end()
  } else {
    text.chars().count()
  };
  wrap(text, CodepointSpan::new(start, end - start), left, right, ellipsis)
}

fn chars_around(text: &str, span: CodepointSpan, radius: usize, ellipsis: &str) -> String {
  let len = text.chars().count();
  let start = span.start.saturating_sub(radius);
  let end = usize::min(span.end().saturating_add(radius), len);
  if start == 0 && end == len {
    return text.to_string();
  }
  wrap(
    text,
    CodepointSpan::new(start, end - start),
    start > 0,
    end < len,
    ellipsis,
  )
}

fn wrap(text: &str, body: CodepointSpan, left: bool, right: bool, ellipsis: &str) -> String {
  let offsets = CharOffsets::new(text);
  let slice = offsets.slice(text, body);
  let mut out = String::with_capacity(slice.len() + 2 * ellipsis.len());
  if left {
    out.push_str(ellipsis);
  }
  out.push_str(slice);
  if right {
    out.push_str(ellipsis);
  }
  out
}

/// Keeps as many leading whole words as fit in `max_chars` characters.
///
/// A first word longer than the limit is kept whole. Text that already fits is
/// returned unchanged.
pub fn truncate_head(text: &str, max_chars: usize, ellipsis: &str) -> String {
  let offsets = CharOffsets::new(text);
  if offsets.char_len() <= max_chars {
    return text.to_string();
  }
  let words = word_spans(text);
  let Some(last_word) = words.last() else {
    return text.to_string();
  };
  let cut = words
    .iter()
    .take_while(|w| w.end() <= max_chars)
    .last()
    .unwrap_or(&words[0])
    .end();
  let head = &text[..offsets.byte_of(cut)];
  if cut >= last_word.end() {
    return head.to_string();
  }
  format!("{head}{ellipsis}")
}
