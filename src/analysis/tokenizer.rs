//! Whitespace tokenization and input normalization.

use unicode_normalization::UnicodeNormalization;

/// Normalize raw text for matching: NFC composition, then Unicode
/// lowercasing.
///
/// Lexicon words and query text both pass through here, so composed and
/// decomposed spellings of the same word compare equal. Matters mostly for
/// scripts with combining marks, e.g. Devanagari.
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Split normalized text into whitespace-delimited tokens.
///
/// Runs of Unicode whitespace separate tokens; empty tokens are never
/// produced. Punctuation is not separated from the token it touches.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Split a token into leading punctuation, core, and trailing punctuation.
///
/// "Punctuation" here is any non-alphanumeric character. A token with no
/// alphanumeric character at all is returned as pure leading affix.
pub fn split_affixes(token: &str) -> (&str, &str, &str) {
    let start = match token.find(|c: char| c.is_alphanumeric()) {
        Some(i) => i,
        None => return (token, "", ""),
    };
    let end = token
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(token.len());
    (&token[..start], &token[start..end], &token[end..])
}
