//! Word-list sources that seed the lexicon trie.

use std::io::BufRead;

use log::debug;

use crate::analysis::tokenizer::normalize;
use crate::error::Result;
use crate::lexicon::trie::Trie;

/// Built-in English word list (Latin script).
const ENGLISH: &[&str] = &[
    "idiot", "stupid", "moron", "dumbass", "jackass", "bastard", "jerk", "loser", "scumbag",
    "crap", "damn", "bloody", "bugger", "wanker", "douchebag", "dimwit", "nitwit", "imbecile",
];

/// Built-in Hindi word list (Devanagari script).
const HINDI: &[&str] = &[
    "\u{092c}\u{0947}\u{0935}\u{0915}\u{0942}\u{092b}",                 // बेवकूफ
    "\u{092e}\u{0942}\u{0930}\u{094d}\u{0916}",                         // मूर्ख
    "\u{0917}\u{0927}\u{093e}",                                         // गधा
    "\u{0909}\u{0932}\u{094d}\u{0932}\u{0942}",                         // उल्लू
    "\u{092a}\u{093e}\u{0917}\u{0932}",                                 // पागल
    "\u{0915}\u{092e}\u{0940}\u{0928}\u{093e}",                         // कमीना
    "\u{0928}\u{093e}\u{0932}\u{093e}\u{092f}\u{0915}",                 // नालायक
    "\u{092c}\u{0926}\u{092e}\u{093e}\u{0936}",                         // बदमाश
    "\u{0928}\u{093f}\u{0915}\u{092e}\u{094d}\u{092e}\u{093e}",         // निकम्मा
    "\u{092c}\u{0915}\u{0935}\u{093e}\u{0938}",                         // बकवास
    "\u{0918}\u{091f}\u{093f}\u{092f}\u{093e}",                         // घटिया
    "\u{0939}\u{0930}\u{093e}\u{092e}\u{0940}",                         // हरामी
];

/// An explicit, owned collection of lexicon words.
///
/// The source is a plain value: the startup collaborator builds it once
/// (built-in lists, user word file, ...) and hands it to the filter. There
/// is no process-wide dictionary state.
///
/// Words are normalized on the way in, the same way query text is, so a
/// source entry always matches its own spelling in input text.
#[derive(Debug, Clone, Default)]
pub struct LexiconSource {
    words: Vec<String>,
}

impl LexiconSource {
    /// Create an empty source.
    pub fn new() -> Self {
        LexiconSource::default()
    }

    /// The built-in word lists (English and Hindi).
    pub fn builtin() -> Self {
        let mut source = LexiconSource::new();
        source.extend(ENGLISH.iter().copied());
        source.extend(HINDI.iter().copied());
        source
    }

    /// Append a single word. Surrounding whitespace is trimmed and the word
    /// normalized; words that normalize to nothing are dropped.
    pub fn push(&mut self, word: &str) {
        let word = normalize(word.trim());
        if !word.is_empty() {
            self.words.push(word);
        }
    }

    /// Append every word from an iterator.
    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            self.push(word);
        }
    }

    /// Read one word per line from `reader`, appending each.
    ///
    /// Blank lines and lines starting with `#` are skipped. Returns the
    /// number of words appended. Opening the file stays with the caller;
    /// this method only consumes lines.
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut appended = 0;
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            self.push(word);
            appended += 1;
        }
        debug!("lexicon source extended with {appended} words from reader");
        Ok(appended)
    }

    /// Number of collected words (duplicates included).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the source holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// View of the collected words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Build a trie holding every collected word.
    pub fn build_trie(&self) -> Trie {
        let mut trie = Trie::new();
        for word in &self.words {
            trie.insert(word);
        }
        debug!("lexicon trie built: {} words", trie.len());
        trie
    }
}
