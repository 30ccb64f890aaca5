//! Text analysis for the filtering pipeline.
//!
//! Analysis is deliberately small: the pipeline lowercases the whole input
//! and splits on whitespace, so punctuation stays attached to the token it
//! touches unless the filter is configured to strip it.

pub mod tokenizer;

pub use tokenizer::{normalize, split_affixes, tokenize};
