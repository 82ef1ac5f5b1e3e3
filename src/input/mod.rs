//! Reading the English source text.

mod reader;

pub use reader::{InputReader, MAX_INPUT_SIZE};
