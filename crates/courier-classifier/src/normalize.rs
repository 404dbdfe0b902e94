//! Text normalization and keyword extraction.
//!
//! First stage of the classification pipeline:
//! - Lower-case, strip punctuation, collapse whitespace
//! - Tokenize, drop stopwords and short tokens
//! - Reduce tokens to base forms with a rule-based lemmatizer
//! - Deduplicate preserving first-occurrence order, cap at 20 keywords

use std::collections::HashSet;

use tracing::warn;

/// Maximum number of keywords returned per message.
pub const MAX_KEYWORDS: usize = 20;

/// Tokens at or below this length carry no keyword evidence.
const MIN_TOKEN_CHARS: usize = 3;

/// Character budget for keyword analysis. Inputs beyond this degrade to the
/// no-keywords outcome instead of being tokenized; pattern scoring still runs
/// on the raw text.
const MAX_ANALYZED_CHARS: usize = 100_000;

/// Common English function words that carry no routing signal.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "nor", "but", "yet", "from", "into", "over", "with",
    "about", "after", "before", "between", "under", "above", "out", "off",
    "are", "was", "were", "been", "being", "does", "did", "has", "had",
    "have", "having", "this", "that", "these", "those", "his", "her", "its",
    "our", "your", "their", "you", "she", "him", "they", "them", "what",
    "which", "who", "whom", "whose", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "not", "only", "own", "same", "than", "too", "very", "can", "could",
    "will", "would", "should", "shall", "may", "might", "must", "just",
    "please", "then", "else", "here", "there", "again", "once", "also",
    "get", "got", "let",
];

/// Outcome of keyword extraction.
///
/// Degradation is a visible branch, not a caught exception: downstream
/// scoring treats the degraded outcome as "no keyword evidence", never as an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordExtraction {
    /// Keywords were extracted normally (possibly an empty list).
    Extracted(Vec<String>),
    /// Extraction was skipped; scoring proceeds with zero keyword evidence.
    Degraded,
}

impl KeywordExtraction {
    /// The extracted keywords, empty when degraded.
    pub fn keywords(&self) -> &[String] {
        match self {
            KeywordExtraction::Extracted(keywords) => keywords,
            KeywordExtraction::Degraded => &[],
        }
    }

    /// Whether extraction fell back to the no-evidence outcome.
    pub fn is_degraded(&self) -> bool {
        matches!(self, KeywordExtraction::Degraded)
    }
}

/// Normalizes raw text and extracts keyword lemmas from it.
///
/// Total and deterministic: the same input always yields the same output,
/// and no valid UTF-8 input can make it fail.
pub struct Normalizer {
    stopwords: HashSet<&'static str>,
    /// Words the lemmatizer must leave untouched (false plurals and the like).
    invariants: HashSet<&'static str>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
            invariants: ["news", "analytics", "focus", "status", "analysis", "always"]
                .into_iter()
                .collect(),
        }
    }

    /// Lower-case the input, replace every character that is neither a word
    /// character nor whitespace with a space, then collapse runs of
    /// whitespace and trim. Empty input yields empty output.
    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let mut replaced = String::with_capacity(lowered.len());
        for ch in lowered.chars() {
            if ch.is_alphanumeric() || ch == '_' || ch.is_whitespace() {
                replaced.push(ch);
            } else {
                replaced.push(' ');
            }
        }
        let mut collapsed = String::with_capacity(replaced.len());
        for token in replaced.split_whitespace() {
            if !collapsed.is_empty() {
                collapsed.push(' ');
            }
            collapsed.push_str(token);
        }
        collapsed
    }

    /// Extract up to [`MAX_KEYWORDS`] keyword lemmas from normalized text.
    ///
    /// Tokens that are stopwords or at most 2 characters long are discarded;
    /// survivors are lemmatized and deduplicated preserving first-occurrence
    /// order. Oversized input degrades to the no-keywords outcome.
    pub fn extract_keywords(&self, normalized: &str) -> KeywordExtraction {
        if normalized.len() > MAX_ANALYZED_CHARS {
            warn!(
                len = normalized.len(),
                budget = MAX_ANALYZED_CHARS,
                "input exceeds keyword analysis budget, degrading to no keyword evidence"
            );
            return KeywordExtraction::Degraded;
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut keywords = Vec::new();

        for token in normalized.split_whitespace() {
            if token.chars().count() < MIN_TOKEN_CHARS || self.stopwords.contains(token) {
                continue;
            }
            let lemma = self.lemmatize(token);
            if seen.insert(lemma.clone()) {
                keywords.push(lemma);
                if keywords.len() == MAX_KEYWORDS {
                    break;
                }
            }
        }

        KeywordExtraction::Extracted(keywords)
    }

    /// Reduce a token to its base form.
    ///
    /// Rule-based suffix stripping: plural endings first, then -ing/-ed with
    /// consonant undoubling and silent-e restoration. Non-ASCII tokens are
    /// returned unchanged.
    fn lemmatize(&self, token: &str) -> String {
        if !token.is_ascii() || self.invariants.contains(token) {
            return token.to_string();
        }

        let mut word = token.to_string();

        if word.ends_with("ies") && word.len() > 4 {
            word.truncate(word.len() - 3);
            word.push('y');
        } else if (word.ends_with("sses")
            || word.ends_with("shes")
            || word.ends_with("ches")
            || word.ends_with("xes"))
            && word.len() > 4
        {
            word.truncate(word.len() - 2);
        } else if word.ends_with('s') && !word.ends_with("ss") && word.len() > 3 {
            word.truncate(word.len() - 1);
        }

        if word.ends_with("ing") && word.len() > 5 {
            word.truncate(word.len() - 3);
            restore_stem(&mut word);
        } else if word.ends_with("ed") && word.len() > 4 {
            word.truncate(word.len() - 2);
            restore_stem(&mut word);
        }

        word
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Repair a stem after stripping -ing/-ed.
///
/// Undoubles trailing consonants (running → run) except l/s/z (calling →
/// call), otherwise restores a silent e after a consonant-vowel-consonant
/// ending (scheduling → schedule, making → make).
fn restore_stem(stem: &mut String) {
    let bytes = stem.as_bytes();
    let n = bytes.len();

    if n >= 2
        && bytes[n - 1] == bytes[n - 2]
        && !is_vowel(bytes[n - 1])
        && !matches!(bytes[n - 1], b'l' | b's' | b'z')
    {
        stem.truncate(n - 1);
        return;
    }

    if n >= 3
        && !is_vowel(bytes[n - 1])
        && is_vowel(bytes[n - 2])
        && !is_vowel(bytes[n - 3])
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
    {
        stem.push('e');
    }
}
