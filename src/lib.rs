//! # Hush
//!
//! A fast, lexicon-based profanity detection and censoring library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Trie-backed lexicon with O(word length) exact lookup
//! - Length-adaptive fuzzy matching that catches misspelled variants
//! - Unicode-aware tokenization and censoring (Latin, Devanagari, ...)
//! - Built-in multi-language word lists, extensible at runtime
// Core modules
pub mod analysis;
mod error;
pub mod filter;
pub mod lexicon;
pub mod matching;

// Re-exports for the public API
pub use error::{HushError, Result};
pub use filter::{
    FilterConfig, FilterOutcome, ProfanityFilter, build_lexicon, censor, censor_with, filter_text,
};
pub use lexicon::shared::SharedLexicon;
pub use lexicon::source::LexiconSource;
pub use lexicon::trie::Trie;
pub use matching::matcher::{Matcher, is_foul};
pub use matching::threshold::ThresholdPolicy;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
