pub mod locator;
pub mod spans;

pub use locator::{locate, locate_first, locate_in};
pub use spans::merge_spans;
