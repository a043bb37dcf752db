use crate::api::types::MatchSpan;

/// Sorts spans by start (longest first on ties) and collapses overlapping or
/// touching spans into their union.
///
/// A merged span keeps the needle id of the span that opened it.
pub fn merge_spans(mut spans: Vec<MatchSpan>) -> Vec<MatchSpan> {
  spans.retain(|s| !s.span.is_empty());
  spans.sort_by(|a, b| {
    a.start()
      .cmp(&b.start())
      .then(b.span.len.cmp(&a.span.len))
      .then(a.needle.cmp(&b.needle))
  });
  let mut merged: Vec<MatchSpan> = Vec::with_capacity(spans.len());
  for span in spans {
    match merged.last_mut() {
      Some(last) if span.start() <= last.end() => {
        if span.end() > last.end() {
          last.span.len = span.end() - last.start();
        }
      }
      _ => merged.push(span),
    }
  }
  merged
}
