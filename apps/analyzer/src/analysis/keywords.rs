//! Keyword frequency — most frequent content words of a document.
//!
//! Candidate words are maximal runs of letters, at least `MIN_WORD_LEN` long, after
//! lower-casing. Runs containing accented or other non-ASCII letters are dropped whole.
//! Digits, punctuation and short connector words never count.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_KEYWORD_COUNT: usize = 20;

const MIN_WORD_LEN: usize = 4;

const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "from", "they", "have", "were", "which", "their", "there", "will",
    "using",
];

/// One keyword and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Returns the `limit` most frequent keywords, highest count first.
/// Equal counts keep the order in which the words first appear.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<KeywordCount> {
    let lowered = text.to_lowercase();

    let mut counts: Vec<KeywordCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for word in alphabetic_runs(&lowered) {
        if !word.is_ascii() || word.len() < MIN_WORD_LEN || is_stop_word(word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(word, counts.len());
                counts.push(KeywordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Splits on anything that is not a letter, yielding the non-empty runs.
fn alphabetic_runs(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|run| !run.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAPER: &str = "Transformers improve translation. The transformer model, \
        with attention, beats recurrent models: attention is all you need. \
        Attention heads (12) were analysed in 2017; this attention study used GPUs.";

    #[test]
    fn test_counts_and_orders_by_frequency() {
        let kws = extract_keywords(PAPER, 3);
        assert_eq!(kws[0].word, "attention");
        assert_eq!(kws[0].count, 4);
        assert_eq!(kws.len(), 3);
    }

    #[test]
    fn test_result_never_exceeds_limit() {
        assert!(extract_keywords(PAPER, 5).len() <= 5);
        assert!(extract_keywords(PAPER, 0).is_empty());
    }

    #[test]
    fn test_stop_words_and_short_words_excluded() {
        let text = "This that with from they have were which their there will using the cat dogs";
        let kws = extract_keywords(text, 20);
        assert_eq!(
            kws,
            vec![KeywordCount {
                word: "dogs".to_string(),
                count: 1
            }]
        );
    }

    #[test]
    fn test_digits_split_words_and_are_dropped() {
        let kws = extract_keywords("abcd1efgh 2024 gpu3 python3", 20);
        let words: Vec<&str> = kws.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["abcd", "efgh", "python"]);
    }

    #[test]
    fn test_accented_words_are_not_fragmented() {
        let kws = extract_keywords("Université Université Málaga communiqué research", 20);
        assert_eq!(
            kws,
            vec![KeywordCount {
                word: "research".to_string(),
                count: 1
            }]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let kws = extract_keywords("zebra apple mango apple zebra mango", 20);
        let words: Vec<&str> = kws.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_case_insensitive_counting() {
        let kws = extract_keywords("Rust RUST rust", 20);
        assert_eq!(kws[0].word, "rust");
        assert_eq!(kws[0].count, 3);
    }

    #[test]
    fn test_properties_hold_on_mixed_text() {
        let kws = extract_keywords(PAPER, DEFAULT_KEYWORD_COUNT);
        for kw in &kws {
            assert!(kw.word.len() >= 4);
            assert!(kw.word.chars().all(|c| c.is_ascii_alphabetic()));
            assert!(!is_stop_word(&kw.word));
        }
        for pair in kws.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
        assert_eq!(kws, extract_keywords(PAPER, DEFAULT_KEYWORD_COUNT));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_keywords("", 20).is_empty());
    }
}
