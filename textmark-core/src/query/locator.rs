use hashbrown::HashSet;
use tracing::trace;

use crate::analysis::normalizer::{normalize, normalize_str, NormalizedString};
use crate::analysis::tokenizer::segment_starts;
use crate::api::types::{CodepointSpan, MatchMode, MatchSpan, Needles};
use crate::query::spans::merge_spans;
use crate::util::offsets::CharOffsets;

/// Per-haystack data shared by every needle of one `locate` call.
struct Haystack<'a> {
  norm: &'a NormalizedString,
  offsets: CharOffsets,
  starts: Option<Vec<bool>>,
}

impl<'a> Haystack<'a> {
  fn new(norm: &'a NormalizedString, mode: MatchMode) -> Self {
    let starts = match mode {
      MatchMode::Exact => None,
      MatchMode::Stem => Some(segment_starts(norm.as_str())),
    };
    Self {
      norm,
      offsets: CharOffsets::new(norm.as_str()),
      starts,
    }
  }

  /// Up to `limit` matches of an already normalized needle, in original
  /// coordinates.
  fn matches(&self, needle: &str, id: usize, limit: usize) -> Vec<MatchSpan> {
    let needle_chars = needle.chars().count();
    find_all(self.norm.as_str(), needle)
      .filter_map(|byte| {
        let start = self.offsets.char_of(byte)?;
        if let Some(starts) = &self.starts {
          if !starts[start] {
            return None;
          }
        }
        let span = self
          .norm
          .to_original(CodepointSpan::new(start, needle_chars));
        Some(MatchSpan { span, needle: id })
      })
      .take(limit)
      .collect()
  }
}

/// Finds every match of `needles` in `haystack`, merged and sorted by start.
///
/// Needles are normalized the same way as the haystack. Needles that are blank
/// or normalize to a term already seen are skipped.
pub fn locate(haystack: &NormalizedString, needles: &Needles, mode: MatchMode) -> Vec<MatchSpan> {
  if haystack.is_empty() || needles.is_empty() {
    return Vec::new();
  }
  let hay = Haystack::new(haystack, mode);
  let mut seen = HashSet::new();
  let mut spans = Vec::new();
  for (id, term) in needles.terms().iter().enumerate() {
    let needle = normalize_str(term.trim());
    if needle.is_empty() || !seen.insert(needle.clone()) {
      continue;
    }
    let found = hay.matches(&needle, id, usize::MAX);
    trace!(needle = %term, ?mode, matches = found.len(), "located needle");
    spans.extend(found);
  }
  merge_spans(spans)
}

/// Normalizes `text` and locates `needles` in it.
pub fn locate_in(text: &str, needles: &Needles, mode: MatchMode) -> Vec<MatchSpan> {
  locate(&normalize(text), needles, mode)
}

/// Earliest match of a single needle, without merging.
pub fn locate_first(haystack: &NormalizedString, needle: &str, mode: MatchMode) -> Option<MatchSpan> {
  let needle = normalize_str(needle.trim());
  if needle.is_empty() || haystack.is_empty() {
    return None;
  }
  let hay = Haystack::new(haystack, mode);
  hay.matches(&needle, 0, 1).into_iter().next()
}

/// Byte offsets of every occurrence of `needle`, overlapping ones included.
fn find_all<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
  let mut from = 0usize;
  std::iter::from_fn(move || {
    if needle.is_empty() {
      return None;
    }
    let pos = from + haystack.get(from..)?.find(needle)?;
    let step = haystack[pos..].chars().next().map_or(1, char::len_utf8);
    from = pos + step;
    Some(pos)
  })
}
