//! Highlight rendering — turns a matched sentence plus term spans into display markup.
//!
//! This is the only place that emits markup. Everything it embeds, the matched
//! text included, is HTML-escaped first.

use serde::{Deserialize, Serialize};

use crate::analysis::search::TermSpan;

/// Visual style of a highlight. Chosen by the caller from the document type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightStyle {
    #[default]
    Research,
    Resume,
}

impl HighlightStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            HighlightStyle::Research => "match-highlight",
            HighlightStyle::Resume => "resume-highlight",
        }
    }
}

/// Wraps each span of `sentence` in a highlight `<span>`.
///
/// Spans must be sorted, non-overlapping byte ranges on char boundaries,
/// which is what `search::find_matches` produces.
pub fn render_highlighted(sentence: &str, spans: &[TermSpan], style: HighlightStyle) -> String {
    let mut out = String::with_capacity(sentence.len() + spans.len() * 40);
    let mut cursor = 0;

    for span in spans {
        out.push_str(&escape_html(&sentence[cursor..span.start]));
        out.push_str("<span class=\"");
        out.push_str(style.css_class());
        out.push_str("\">");
        out.push_str(&escape_html(&sentence[span.start..span.end]));
        out.push_str("</span>");
        cursor = span.end;
    }
    out.push_str(&escape_html(&sentence[cursor..]));
    out
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
