//! Foulness decision against a lexicon trie.

use log::trace;

use crate::lexicon::trie::Trie;
use crate::matching::similarity::ratio;
use crate::matching::threshold::ThresholdPolicy;

/// Decide whether `word` is foul, given a trie, a snapshot of its words,
/// and a threshold policy.
///
/// Exact trie membership always counts. Otherwise the best similarity ratio
/// over `candidates` must reach the policy's threshold for the word's
/// length. Empty words are never foul, and an empty candidate set never
/// matches.
pub fn is_foul_with(
    word: &str,
    trie: &Trie,
    candidates: &[String],
    policy: &ThresholdPolicy,
) -> bool {
    if word.is_empty() {
        return false;
    }
    if trie.contains(word) {
        return true;
    }
    let threshold = policy.threshold_for(word.chars().count());
    if threshold >= 1.0 {
        // Exact-only band; membership was already checked and a ratio of
        // exactly 1.0 implies string equality.
        return false;
    }
    let best = candidates
        .iter()
        .map(|candidate| ratio(word, candidate))
        .fold(0.0f64, f64::max);
    let foul = best >= threshold;
    trace!("fuzzy check {word:?}: best ratio {best:.3} vs threshold {threshold}, foul={foul}");
    foul
}

/// Decide whether `word` is foul under the default threshold policy.
///
/// Candidates are enumerated from the trie on every call; use a [`Matcher`]
/// to pay that cost once across many words.
pub fn is_foul(word: &str, trie: &Trie) -> bool {
    is_foul_with(word, trie, &trie.words(), &ThresholdPolicy::default())
}

/// A matcher that snapshots the candidate set once.
///
/// Enumerating the trie dominates the cost of a fuzzy check. A `Matcher`
/// borrows the trie, enumerates at construction, and can then be asked
/// about any number of words. The snapshot stays valid because the borrow
/// keeps the trie immutable for the matcher's lifetime.
pub struct Matcher<'a> {
    trie: &'a Trie,
    candidates: Vec<String>,
    policy: ThresholdPolicy,
}

impl<'a> Matcher<'a> {
    /// Create a matcher with the default threshold policy.
    pub fn new(trie: &'a Trie) -> Self {
        Matcher::with_policy(trie, ThresholdPolicy::default())
    }

    /// Create a matcher with an explicit threshold policy.
    pub fn with_policy(trie: &'a Trie, policy: ThresholdPolicy) -> Self {
        Matcher {
            trie,
            candidates: trie.words(),
            policy,
        }
    }

    /// Whether `word` matches the lexicon exactly or approximately.
    pub fn is_foul(&self, word: &str) -> bool {
        is_foul_with(word, self.trie, &self.candidates, &self.policy)
    }
}
