use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use textmark_core::snippet::truncate_head;
use textmark_core::{highlight, normalize, normalize_str, window_around, WindowOptions};

const POOL: &[char] = &[
  'a', 'B', 'c', 'é', 'Ü', 'ß', 'ø', 'Æ', 'İ', 'ǅ', 'Å', 'ж', 'Ё', ' ', ' ', '\t', ',', '!', '-',
  '\u{301}', '\u{308}', '\u{327}', '1', '漢',
];

const VOCAB: &[&str] = &[
  "rust", "Référent", "über", "straße", "kompetent", "цитрус", "bedarfs", "color:", "black",
  "John", "noise",
];

fn random_text(rng: &mut StdRng, max_len: usize) -> String {
  let len = rng.gen_range(0..max_len);
  (0..len).map(|_| POOL[rng.gen_range(0..POOL.len())]).collect()
}

fn random_words(rng: &mut StdRng, count: usize) -> Vec<&'static str> {
  (0..count).map(|_| VOCAB[rng.gen_range(0..VOCAB.len())]).collect()
}

#[test]
fn normalization_is_idempotent() {
  let mut rng = StdRng::seed_from_u64(7);
  for _ in 0..500 {
    let text = random_text(&mut rng, 40);
    let once = normalize_str(&text);
    assert_eq!(normalize_str(&once), once, "input {text:?}");
  }
}

#[test]
fn position_map_is_parallel_and_ordered() {
  let mut rng = StdRng::seed_from_u64(11);
  for _ in 0..500 {
    let text = random_text(&mut rng, 40);
    let norm = normalize(&text);
    assert_eq!(norm.positions().len(), norm.as_str().chars().count());
    assert_eq!(norm.original_len(), text.chars().count());
    assert!(norm.positions().windows(2).all(|w| w[0] <= w[1]), "{text:?}");
    assert!(norm.positions().iter().all(|&p| p < norm.original_len()));
  }
}

#[test]
fn unmatched_needle_never_corrupts_text() {
  let mut rng = StdRng::seed_from_u64(23);
  for _ in 0..300 {
    let text = random_text(&mut rng, 300);
    assert_eq!(highlight(&text, "qqq"), text);
    assert_eq!(
      window_around(&text, "qqq", 3),
      truncate_head(&text, WindowOptions::default().fallback_chars, "..")
    );
  }
}

#[test]
fn stripping_markup_restores_input() {
  let mut rng = StdRng::seed_from_u64(31);
  for _ in 0..300 {
    let words = random_words(&mut rng, 20);
    let text = words.join(" ");
    let needles: Vec<&str> = (0..3).map(|_| words[rng.gen_range(0..words.len())]).collect();
    let out = highlight(&text, needles.as_slice());
    assert!(out.contains("<b>"), "{out}");
    assert_eq!(out.replace("<b>", "").replace("</b>", ""), text);
    assert!(!out.contains("<b><b>"));
  }
}

#[test]
fn word_windows_contain_only_whole_words() {
  let mut rng = StdRng::seed_from_u64(47);
  for _ in 0..300 {
    let count = rng.gen_range(1..40);
    let words = random_words(&mut rng, count);
    let text = words.join(" ");
    let known: HashSet<&str> = words.iter().copied().collect();
    let needle = words[rng.gen_range(0..words.len())];
    let radius = rng.gen_range(1..6);
    let window = window_around(&text, needle, radius);
    let body = window.trim_start_matches("..").trim_end_matches("..");
    let kept: Vec<&str> = body.split_whitespace().collect();
    assert!(kept.iter().all(|w| known.contains(w)), "{window}");
    assert!(kept.len() <= 2 * radius + 1, "{window}");
    assert!(
      normalize_str(body).contains(&normalize_str(needle)),
      "{needle} missing from {window}"
    );
  }
}
