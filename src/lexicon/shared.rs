//! Shared lexicon with concurrent readers and an exclusive writer.

use log::debug;
use parking_lot::RwLock;

use crate::analysis::tokenizer::normalize;
use crate::lexicon::source::LexiconSource;
use crate::lexicon::trie::Trie;

struct Inner {
    trie: Trie,
    /// Candidate set for fuzzy matching, kept in step with the trie: every
    /// successful insert appends here under the same write lock.
    candidates: Vec<String>,
}

/// A lexicon that may keep growing while it is being queried.
///
/// Readers share the trie freely; insertion is serialized behind a write
/// lock and updates the cached candidate list under that same lock, so a
/// reader never observes a partially linked word and never pays for a full
/// re-enumeration of the trie.
pub struct SharedLexicon {
    inner: RwLock<Inner>,
}

impl SharedLexicon {
    /// Build a shared lexicon from a word-list source.
    pub fn from_source(source: &LexiconSource) -> Self {
        let trie = source.build_trie();
        let candidates = trie.words();
        SharedLexicon {
            inner: RwLock::new(Inner { trie, candidates }),
        }
    }

    /// Insert a word at runtime, returning `true` if it was new.
    ///
    /// The word is normalized the same way source words are.
    pub fn insert(&self, word: &str) -> bool {
        let word = normalize(word.trim());
        if word.is_empty() {
            return false;
        }
        let mut inner = self.inner.write();
        if inner.trie.insert(&word) {
            debug!("lexicon grew to {} words", inner.trie.len());
            inner.candidates.push(word);
            true
        } else {
            false
        }
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.inner.read().trie.len()
    }

    /// Whether the lexicon stores no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` with read access to the trie and the cached candidate set.
    pub fn read<T>(&self, f: impl FnOnce(&Trie, &[String]) -> T) -> T {
        let inner = self.inner.read();
        f(&inner.trie, &inner.candidates)
    }
}
