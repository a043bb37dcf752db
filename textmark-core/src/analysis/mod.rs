pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{normalize, normalize_str, NormalizedString};
