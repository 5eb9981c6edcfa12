//! Heuristic Keyword Extractor: tokenizes free text into keyword sets without any
//! external service. Backs the preview endpoint and the heuristic match mode.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::scoring::round2;

const MAX_STRENGTHS: usize = 10;
const MAX_GAPS: usize = 10;
const MAX_SUGGESTIONS: usize = 5;
const MAX_PREVIEW_KEYWORDS: usize = 20;
const MIN_TOKEN_CHARS: usize = 2;

/// Structural words and common JD/resume verbs that carry no skill signal.
const STOP_WORDS: &[&str] = &[
    // structure
    "and", "or", "the", "a", "an", "to", "of", "in", "on", "for", "with",
    // pronouns, articles, copulas
    "i", "me", "my", "you", "your", "we", "our", "they", "their",
    "is", "am", "are", "was", "were", "be", "been", "being",
    "this", "that", "these", "those",
    // verbs that pollute JD/resume keyword sets
    "looking", "build", "built", "use", "used", "using", "need", "needs",
    "want", "wants", "seeking", "seeks", "require", "requires", "required",
    "experience", "experiences",
];

/// Output of the heuristic preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewReport {
    pub match_score: f64,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub suggestions: Vec<String>,
    pub resume_keywords: Vec<String>,
    pub role_keywords: Vec<String>,
}

impl PreviewReport {
    /// Zeroed report carrying a single gap message.
    pub fn degenerate(reason: &str) -> Self {
        Self {
            match_score: 0.0,
            strengths: vec![],
            gaps: vec![reason.to_string()],
            suggestions: vec![],
            resume_keywords: vec![],
            role_keywords: vec![],
        }
    }
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Extracts the keyword set of a text.
///
/// Alphanumerics plus `+ - .` form tokens; anything else is a boundary. Trailing dots are
/// stripped ("cd." → "cd"), then short tokens and stop words are dropped.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .map(|token| token.trim_end_matches('.'))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Builds the preview from already-extracted keyword sets.
pub fn build_preview(resume: &BTreeSet<String>, role: &BTreeSet<String>) -> PreviewReport {
    let overlap: Vec<&String> = role.intersection(resume).collect();
    let missing: Vec<&String> = role.difference(resume).collect();

    let match_score = round2(overlap.len() as f64 / role.len().max(1) as f64);

    let strengths: Vec<String> = overlap.into_iter().take(MAX_STRENGTHS).cloned().collect();
    let gaps: Vec<String> = missing.into_iter().take(MAX_GAPS).cloned().collect();
    let suggestions = gaps
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|term| format!("Add evidence for: {term}"))
        .collect();

    PreviewReport {
        match_score,
        strengths,
        gaps,
        suggestions,
        resume_keywords: resume.iter().take(MAX_PREVIEW_KEYWORDS).cloned().collect(),
        role_keywords: role.iter().take(MAX_PREVIEW_KEYWORDS).cloned().collect(),
    }
}

/// Heuristic preview over raw texts. Callers handle blank input before getting here.
pub fn preview_match(resume_text: &str, jd_text: &str) -> PreviewReport {
    build_preview(&extract_keywords(resume_text), &extract_keywords(jd_text))
}
