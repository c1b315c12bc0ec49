//! Keyword-in-context search — finds the sentences that mention any of a set of terms.
//!
//! Matching is literal and case-insensitive: every term is regex-escaped before use,
//! so `a.b*c` only ever matches the text `a.b*c`. Matching returns structured data
//! (`SentenceMatch`); markup is produced separately by `highlight::render_highlighted`.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::warn;

use crate::analysis::highlight::{render_highlighted, HighlightStyle};

/// Maximum number of hits returned for one search.
pub const MAX_HITS: usize = 15;

const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

/// Byte range of a term occurrence inside a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TermSpan {
    pub start: usize,
    pub end: usize,
}

/// A sentence containing at least one search term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceMatch {
    pub sentence: String,
    /// Every term found in the sentence, in the caller's term order. Never empty.
    pub matched_terms: Vec<String>,
    /// Occurrences of the first matched term.
    pub spans: Vec<TermSpan>,
}

/// A search hit ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub sentence: String,
    pub matched_terms: Vec<String>,
    pub highlighted: String,
}

struct TermMatcher {
    term: String,
    pattern: Regex,
}

impl TermMatcher {
    fn new(term: &str) -> Option<Self> {
        match RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(Self {
                term: term.to_string(),
                pattern,
            }),
            Err(e) => {
                // Only reachable for terms beyond the regex size limit.
                warn!("Dropping search term that cannot be compiled: {e}");
                None
            }
        }
    }
}

/// Splits text into trimmed, non-empty sentences on runs of `.`, `!` and `?`.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_DELIMITERS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Finds up to `MAX_HITS` sentences containing any of `terms`, in document order.
///
/// Terms are matched exactly as given, surrounding whitespace included.
/// Blank terms are ignored; an empty or all-blank term list yields no matches.
/// Terms equal up to case are reported once.
pub fn find_matches(text: &str, terms: &[String]) -> Vec<SentenceMatch> {
    let mut matchers: Vec<TermMatcher> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for term in terms.iter().filter(|t| !t.trim().is_empty()) {
        let folded = term.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        if let Some(matcher) = TermMatcher::new(term) {
            matchers.push(matcher);
        }
    }

    if matchers.is_empty() {
        return Vec::new();
    }

    split_sentences(text)
        .filter_map(|sentence| match_sentence(sentence, &matchers))
        .take(MAX_HITS)
        .collect()
}

fn match_sentence(sentence: &str, matchers: &[TermMatcher]) -> Option<SentenceMatch> {
    let found: Vec<&TermMatcher> = matchers
        .iter()
        .filter(|m| m.pattern.is_match(sentence))
        .collect();

    let first = found.first()?;
    let spans = first
        .pattern
        .find_iter(sentence)
        .map(|m| TermSpan {
            start: m.start(),
            end: m.end(),
        })
        .collect();

    Some(SentenceMatch {
        sentence: sentence.to_string(),
        matched_terms: found.iter().map(|m| m.term.clone()).collect(),
        spans,
    })
}

/// Renders matches for display with the given highlight style.
pub fn render_hits(matches: Vec<SentenceMatch>, style: HighlightStyle) -> Vec<SearchHit> {
    matches
        .into_iter()
        .map(|m| SearchHit {
            highlighted: render_highlighted(&m.sentence, &m.spans, style),
            sentence: m.sentence,
            matched_terms: m.matched_terms,
        })
        .collect()
}

/// Search and render in one step.
pub fn smart_search(text: &str, terms: &[String], style: HighlightStyle) -> Vec<SearchHit> {
    render_hits(find_matches(text, terms), style)
}

/// Parses a comma-separated query into search terms.
pub fn parse_terms(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
