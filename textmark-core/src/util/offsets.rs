use crate::api::types::CodepointSpan;

/// Byte offset of every character boundary in a string, including the end.
#[derive(Debug, Clone)]
pub struct CharOffsets {
  bytes: Vec<usize>,
}

impl CharOffsets {
  pub fn new(text: &str) -> Self {
    let mut bytes: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
    bytes.push(text.len());
    Self { bytes }
  }

  /// Number of characters.
  pub fn char_len(&self) -> usize {
    self.bytes.len() - 1
  }

  /// Byte offset of character `idx`, clamped to the end of the string.
  pub fn byte_of(&self, idx: usize) -> usize {
    self.bytes[usize::min(idx, self.char_len())]
  }

  /// Character index of a byte offset that lies on a boundary.
  pub fn char_of(&self, byte: usize) -> Option<usize> {
    self.bytes.binary_search(&byte).ok()
  }

  pub fn slice<'a>(&self, text: &'a str, span: CodepointSpan) -> &'a str {
    &text[self.byte_of(span.start)..self.byte_of(span.end())]
  }
}
