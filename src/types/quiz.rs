//! Quiz question types.
//!
//! A cloze question arrives as one annotated string, e.g.
//! `"The capital of France is @_Paris_@"`. The answer span is delimited by
//! [`ANSWER_BEGIN`] and [`ANSWER_END`]; only the first well-formed span counts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder used by [`ClozeQuestion::question`].
pub const DEFAULT_BLANK_SYMBOL: &str = "______";

/// Opening marker of the inline answer span.
pub const ANSWER_BEGIN: &str = "@_";
/// Closing marker of the inline answer span.
pub const ANSWER_END: &str = "_@";

static WRAPPED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\r?\n").expect("wrapped-line pattern is valid"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Fill-in-the-blank question backed by a single annotated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClozeQuestion {
    #[serde(rename = "questionAnswer")]
    question_answer: String,
}

impl ClozeQuestion {
    pub fn new(question_answer: impl Into<String>) -> Self {
        Self {
            question_answer: question_answer.into(),
        }
    }

    /// The annotated string exactly as returned by the gateway.
    pub fn raw(&self) -> &str {
        &self.question_answer
    }

    /// Visible question text with the answer blanked out by [`DEFAULT_BLANK_SYMBOL`].
    pub fn question(&self) -> String {
        self.question_with(DEFAULT_BLANK_SYMBOL)
    }

    /// Visible question text with the answer span replaced by `blank_symbol`.
    ///
    /// Whitespace is normalized: hyphenated line wraps are joined, newlines
    /// become spaces and whitespace runs collapse into one space.
    pub fn question_with(&self, blank_symbol: &str) -> String {
        let text = &self.question_answer;
        match answer_span(text) {
            Some((start, end)) => {
                let blanked = format!("{}{}{}", &text[..start], blank_symbol, &text[end..]);
                normalize_whitespace(&blanked)
            }
            None => normalize_whitespace(text),
        }
    }

    /// Text between the first pair of markers, verbatim.
    ///
    /// Returns an empty string when no delimited span exists.
    pub fn answer(&self) -> String {
        let text = &self.question_answer;
        answer_span(text)
            .map(|(start, end)| text[start + ANSWER_BEGIN.len()..end - ANSWER_END.len()].to_string())
            .unwrap_or_default()
    }

    pub fn has_answer(&self) -> bool {
        answer_span(&self.question_answer).is_some()
    }
}

/// Byte range of the first answer span, markers included.
///
/// A span may not contain either marker or a line break, so `@_a @_b_@`
/// yields the span around `b` and `@_New\nYork_@` has no span at all.
fn answer_span(text: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(offset) = text[from..].find(ANSWER_BEGIN) {
        let open = from + offset;
        let body = open + ANSWER_BEGIN.len();
        let close = text[body..].find(ANSWER_END).map(|i| body + i)?;
        let reopen = text[body..].find(ANSWER_BEGIN).map(|i| body + i);
        let line_break = text[body..].find(is_line_break).map(|i| body + i);
        match (reopen, line_break) {
            (Some(r), _) if r < close && line_break.map_or(true, |b| r < b) => from = r,
            (_, Some(b)) if b < close => from = open + 1,
            _ => return Some((open, close + ANSWER_END.len())),
        }
    }
    None
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

fn normalize_whitespace(text: &str) -> String {
    let joined = WRAPPED_LINE.replace_all(text, "");
    WHITESPACE_RUN.replace_all(joined.trim(), " ").into_owned()
}

/// Explicit question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhQuestion {
    question: String,
    answer: String,
}

impl WhQuestion {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}
