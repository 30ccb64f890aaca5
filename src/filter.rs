//! The tokenize → detect → censor pipeline.

use log::debug;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tokenizer::{normalize, split_affixes, tokenize};
use crate::error::Result;
use crate::lexicon::shared::SharedLexicon;
use crate::lexicon::source::LexiconSource;
use crate::lexicon::trie::Trie;
use crate::matching::matcher::is_foul_with;
use crate::matching::threshold::ThresholdPolicy;

/// Configuration for the filtering pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Character used to mask censored graphemes.
    #[serde(default = "default_mask")]
    pub mask: char,

    /// Detach leading/trailing punctuation from tokens before matching.
    ///
    /// Off by default: tokens are split purely on whitespace, so "idiot,"
    /// does not match "idiot". Turning this on matches the bare core and
    /// re-attaches the punctuation around the censored word.
    #[serde(default)]
    pub strip_punctuation: bool,

    /// Length-adaptive similarity thresholds.
    #[serde(default)]
    pub thresholds: ThresholdPolicy,
}

fn default_mask() -> char {
    '*'
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            mask: default_mask(),
            strip_punctuation: false,
            thresholds: ThresholdPolicy::default(),
        }
    }
}

impl FilterConfig {
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    /// Check the configuration for values the pipeline cannot honor.
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()
    }
}

#[derive(Default)]
pub struct FilterConfigBuilder {
    mask: Option<char>,
    strip_punctuation: bool,
    thresholds: Option<ThresholdPolicy>,
}

impl FilterConfigBuilder {
    pub fn mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn strip_punctuation(mut self, strip: bool) -> Self {
        self.strip_punctuation = strip;
        self
    }

    pub fn thresholds(mut self, policy: ThresholdPolicy) -> Self {
        self.thresholds = Some(policy);
        self
    }

    pub fn build(self) -> FilterConfig {
        FilterConfig {
            mask: self.mask.unwrap_or_else(default_mask),
            strip_punctuation: self.strip_punctuation,
            thresholds: self.thresholds.unwrap_or_default(),
        }
    }
}

/// A censored rendering together with the tokens that were masked.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// The censored text.
    pub text: String,
    /// `(token index, token as matched)` for every censored token.
    pub matches: Vec<(usize, String)>,
}

impl FilterOutcome {
    /// Whether no token was censored.
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Build a lexicon trie from any number of word lists.
///
/// Every word of every list is normalized and inserted into a fresh trie.
pub fn build_lexicon<I, L, W>(word_lists: I) -> Trie
where
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let mut trie = Trie::new();
    for list in word_lists {
        for word in list {
            trie.insert(&normalize(word.as_ref().trim()));
        }
    }
    debug!("lexicon built: {} words", trie.len());
    trie
}

/// Mask a word, keeping its first grapheme visible.
///
/// Words of at most one grapheme become a single mask character. This is a
/// cosmetic rendering, not a security control: the original length and
/// first letter stay visible.
pub fn censor(word: &str) -> String {
    censor_with(word, default_mask())
}

/// Mask a word with a caller-chosen mask character.
pub fn censor_with(word: &str, mask: char) -> String {
    let mut graphemes = word.graphemes(true);
    let first = match graphemes.next() {
        Some(grapheme) => grapheme,
        None => return mask.to_string(),
    };
    let rest = graphemes.count();
    if rest == 0 {
        return mask.to_string();
    }
    let mut masked = String::with_capacity(first.len() + rest);
    masked.push_str(first);
    masked.extend(std::iter::repeat(mask).take(rest));
    masked
}

/// Censor foul tokens in `text` against `trie`, with default configuration.
///
/// The whole input is lowercased, split on whitespace, each token checked
/// against the lexicon, and the tokens rejoined with single spaces. The
/// output always carries the same token count as the input.
pub fn filter_text(text: &str, trie: &Trie) -> String {
    let candidates = trie.words();
    run(text, trie, &candidates, &FilterConfig::default()).text
}

/// Shared pipeline body: candidates are whatever snapshot the caller holds.
fn run(text: &str, trie: &Trie, candidates: &[String], config: &FilterConfig) -> FilterOutcome {
    let normalized = normalize(text);
    let mut out = String::with_capacity(normalized.len());
    let mut matches = Vec::new();
    for (index, token) in tokenize(&normalized).enumerate() {
        if index > 0 {
            out.push(' ');
        }
        let (lead, core, trail) = if config.strip_punctuation {
            split_affixes(token)
        } else {
            ("", token, "")
        };
        if is_foul_with(core, trie, candidates, &config.thresholds) {
            matches.push((index, core.to_string()));
            out.push_str(lead);
            out.push_str(&censor_with(core, config.mask));
            out.push_str(trail);
        } else {
            out.push_str(token);
        }
    }
    FilterOutcome { text: out, matches }
}

/// A ready-to-use filter: lexicon, candidate cache, and configuration.
///
/// The lexicon may keep growing while the filter is shared across threads;
/// [`SharedLexicon`] serializes writers and keeps readers consistent.
pub struct ProfanityFilter {
    lexicon: SharedLexicon,
    config: FilterConfig,
}

impl ProfanityFilter {
    /// Build a filter over `source` with the default configuration.
    pub fn new(source: &LexiconSource) -> Self {
        ProfanityFilter {
            lexicon: SharedLexicon::from_source(source),
            config: FilterConfig::default(),
        }
    }

    /// Build a filter with an explicit configuration.
    pub fn with_config(source: &LexiconSource, config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(ProfanityFilter {
            lexicon: SharedLexicon::from_source(source),
            config,
        })
    }

    /// Add a word to the lexicon at runtime. Returns `true` if it was new.
    pub fn add_word(&self, word: &str) -> bool {
        self.lexicon.insert(word)
    }

    /// Number of lexicon words.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Whether a single word matches the lexicon exactly or approximately.
    pub fn is_foul(&self, word: &str) -> bool {
        let word = normalize(word.trim());
        self.lexicon
            .read(|trie, candidates| is_foul_with(&word, trie, candidates, &self.config.thresholds))
    }

    /// Censor `text`, reporting which tokens matched.
    pub fn scan(&self, text: &str) -> FilterOutcome {
        self.lexicon
            .read(|trie, candidates| run(text, trie, candidates, &self.config))
    }

    /// Censor `text`.
    pub fn filter(&self, text: &str) -> String {
        self.scan(text).text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> Trie {
        build_lexicon([words.iter().copied()])
    }

    #[test]
    fn test_censor() {
        assert_eq!(censor("cat"), "c**");
        assert_eq!(censor("x"), "*");
        assert_eq!(censor(""), "*");
        assert_eq!(censor("idiot"), "i****");
    }

    #[test]
    fn test_censor_counts_graphemes() {
        // A four-grapheme Devanagari word keeps its first syllable.
        let masked = censor_with("\u{092a}\u{093e}\u{0917}\u{0932}", '*');
        assert_eq!(masked, "\u{092a}\u{093e}**");
    }

    #[test]
    fn test_build_lexicon_from_multiple_lists() {
        let trie = build_lexicon([vec!["idiot", "Moron"], vec!["\u{0917}\u{0927}\u{093e}"]]);
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("moron"));
    }

    #[test]
    fn test_clean_text_unchanged_modulo_case() {
        let trie = trie_of(&["idiot"]);
        assert_eq!(
            filter_text("this is a clean sentence", &trie),
            "this is a clean sentence"
        );
    }

    #[test]
    fn test_filter_censors_exact_match() {
        let trie = trie_of(&["idiot"]);
        let filtered = filter_text("You IDIOT stop", &trie);
        assert_eq!(filtered, "you i**** stop");
        assert_eq!(filtered.split_whitespace().count(), 3);
    }

    #[test]
    fn test_filter_censors_fuzzy_match() {
        let trie = trie_of(&["idiot"]);
        assert_eq!(filter_text("you idiott stop", &trie), "you i***** stop");
    }

    #[test]
    fn test_attached_punctuation_suppresses_match_by_default() {
        let trie = trie_of(&["cad"]);
        // "cad," is length 4 with no candidate within the 0.9 band.
        assert_eq!(filter_text("you cad, stop", &trie), "you cad, stop");
    }

    #[test]
    fn test_strip_punctuation_restores_match() {
        let source = LexiconSource::builtin();
        let config = FilterConfig::builder().strip_punctuation(true).build();
        let filter = ProfanityFilter::with_config(&source, config).unwrap();
        assert_eq!(filter.filter("You IDIOT, stop"), "you i****, stop");
    }

    #[test]
    fn test_scan_reports_matches() {
        let filter = ProfanityFilter::new(&LexiconSource::builtin());
        let outcome = filter.scan("you absolute idiot");
        assert!(!outcome.is_clean());
        assert_eq!(outcome.matches, vec![(2, "idiot".to_string())]);

        let outcome = filter.scan("a perfectly fine sentence");
        assert!(outcome.is_clean());
        assert_eq!(outcome.text, "a perfectly fine sentence");
    }

    #[test]
    fn test_runtime_added_word_is_censored() {
        let filter = ProfanityFilter::new(&LexiconSource::new());
        assert_eq!(filter.filter("such a grommet"), "such a grommet");
        assert!(filter.add_word("grommet"));
        assert_eq!(filter.filter("such a grommet"), "such a g******");
    }

    #[test]
    fn test_custom_mask() {
        let source = LexiconSource::builtin();
        let config = FilterConfig::builder().mask('#').build();
        let filter = ProfanityFilter::with_config(&source, config).unwrap();
        assert_eq!(filter.filter("idiot"), "i####");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = FilterConfig {
            thresholds: ThresholdPolicy {
                mid_ratio: 2.0,
                ..ThresholdPolicy::default()
            },
            ..FilterConfig::default()
        };
        assert!(ProfanityFilter::with_config(&LexiconSource::new(), bad).is_err());
    }

    #[test]
    fn test_empty_input() {
        let trie = trie_of(&["idiot"]);
        assert_eq!(filter_text("", &trie), "");
        assert_eq!(filter_text("   ", &trie), "");
    }
}
