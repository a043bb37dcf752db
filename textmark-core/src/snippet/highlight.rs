use tracing::trace;

use crate::analysis::normalizer::normalize;
use crate::api::types::{HighlightOptions, HighlightTemplate, MatchSpan, Needles};
use crate::query::locator::locate;
use crate::query::spans::merge_spans;
use crate::util::offsets::CharOffsets;

/// Wraps every occurrence of `needles` in `<b>..</b>`.
///
/// Matching ignores case and diacritics and accepts a needle as the start of a
/// longer word. The wrapped text keeps its original spelling.
pub fn highlight(text: &str, needles: impl Into<Needles>) -> String {
  highlight_with(text, needles, &HighlightOptions::default())
}

pub fn highlight_with(text: &str, needles: impl Into<Needles>, opts: &HighlightOptions) -> String {
  let needles = needles.into();
  if text.is_empty() || needles.is_empty() {
    return text.to_string();
  }
  let spans = locate(&normalize(text), &needles, opts.mode);
  if spans.is_empty() {
    return text.to_string();
  }
  trace!(spans = spans.len(), "highlighting");
  render(text, &spans, &opts.template)
}

/// Wraps caller-located spans. Spans may be unsorted or overlap; they are
/// merged before rendering.
pub fn highlight_spans(text: &str, spans: &[MatchSpan], template: &HighlightTemplate) -> String {
  render(text, &merge_spans(spans.to_vec()), template)
}

// `spans` must be sorted and disjoint.
fn render(text: &str, spans: &[MatchSpan], template: &HighlightTemplate) -> String {
  let offsets = CharOffsets::new(text);
  let extra = spans.len() * (template.prefix().len() + template.suffix().len());
  let mut out = String::with_capacity(text.len() + extra);
  let mut cursor = 0usize;
  for m in spans {
    let start = offsets.byte_of(m.start());
    let end = offsets.byte_of(m.end());
    if start < cursor || start >= end {
      continue;
    }
    out.push_str(&text[cursor..start]);
    template.render_into(&mut out, &text[start..end]);
    cursor = end;
  }
  out.push_str(&text[cursor..]);
  out
}
