//! Lexicon storage: the trie membership structure and the word-list
//! sources that feed it.
//!
//! # Module Structure
//!
//! - `trie`: prefix tree over lexicon words
//! - `source`: built-in and user-supplied word lists
//! - `shared`: concurrent-reader / exclusive-writer wrapper with a cached
//!   candidate set

pub mod shared;
pub mod source;
pub mod trie;

// Re-exports
pub use shared::SharedLexicon;
pub use source::LexiconSource;
pub use trie::Trie;
