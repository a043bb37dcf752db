use textmark_core::{highlight, window_around, window_around_with, WindowOptions};

fn long_text() -> String {
  let before: Vec<String> = (0..50).map(|i| format!("w{i}")).collect();
  let after: Vec<String> = (0..50).map(|i| format!("x{i}")).collect();
  format!("{} John {}", before.join(" "), after.join(" "))
}

#[test]
fn observed_window_scenarios() {
  assert_eq!(window_around("foo abc bar", "abc", 4), "foo abc bar");
  // the radius counts words, so one word per side fits entirely
  assert_eq!(window_around("foo abc bar", "abc", 2), "foo abc bar");
  assert_eq!(
    window_around_with("foo abc bar", "abc", &WindowOptions::chars(2)),
    "..o abc b.."
  );
}

#[test]
fn window_then_highlight_keeps_casing() {
  let text = long_text();
  let window = window_around(&text, "john", 30);
  assert!(window.starts_with("..w20 "), "{window}");
  assert!(window.ends_with(" x29.."), "{window}");
  let body = window.trim_start_matches("..").trim_end_matches("..");
  assert_eq!(body.split_whitespace().count(), 61);

  let highlighted = highlight(&window, "John");
  assert_eq!(highlighted.matches("<b>John</b>").count(), 1);
  assert_eq!(highlighted.replace("<b>John</b>", "John"), window);
}

#[test]
fn match_near_start_has_no_leading_marker() {
  let text = long_text();
  let window = window_around(&text, "w3", 5);
  assert!(window.starts_with("w0 w1 w2 w3"), "{window}");
  assert!(window.ends_with("w8.."), "{window}");
}

#[test]
fn cyrillic_text_respects_words() {
  let text = "В чащах юга жил бы цитрус? Да, но фальшивый экземпляр!";
  assert_eq!(window_around(text, "ЦИТРУС", 2), "..жил бы цитрус? Да, но..");
  assert_eq!(window_around(text, "чащах", 1), "В чащах юга..");
}

#[test]
fn missing_needle_uses_head_truncation() {
  let text = long_text();
  let window = window_around(&text, "nobody", 3);
  assert!(window.ends_with(".."));
  let body = window.trim_end_matches("..");
  assert!(body.chars().count() <= 200);
  assert!(text.starts_with(body));
  assert!(text[body.len()..].starts_with(' '));
}
