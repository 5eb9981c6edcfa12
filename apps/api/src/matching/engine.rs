//! Match Engine: orchestrates one match request.
//!
//! Flow: validate input → (semantic matcher | keyword extractor) → coverage → combine →
//!       assemble. Stateless per request; the only shared piece is the injected matcher.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::matching::keywords::{extract_keywords, preview_match, PreviewReport};
use crate::matching::result::{assemble_heuristic, assemble_semantic, MatchMode, MatchResult};
use crate::matching::semantic::SemanticMatcher;
use crate::matching::MatchError;

/// Gap message returned when either text is blank.
pub const REQUIRED_FIELDS_GAP: &str = "resume_text and job_description_text are required";

/// Texts to compare. Both must be non-blank for a real analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchInput {
    #[serde(alias = "cv_text")]
    pub resume_text: String,
    #[serde(alias = "jd_text", alias = "job_description")]
    pub job_description_text: String,
}

impl MatchInput {
    pub fn new(resume_text: impl Into<String>, job_description_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_description_text: job_description_text.into(),
        }
    }

    /// Returns the trimmed texts, or `InvalidInput` if either is blank.
    pub fn validate(&self) -> Result<(&str, &str), MatchError> {
        let resume = self.resume_text.trim();
        let jd = self.job_description_text.trim();
        if resume.is_empty() || jd.is_empty() {
            return Err(MatchError::InvalidInput(REQUIRED_FIELDS_GAP.to_string()));
        }
        Ok((resume, jd))
    }
}

pub struct MatchEngine {
    matcher: Arc<dyn SemanticMatcher>,
}

impl MatchEngine {
    pub fn new(matcher: Arc<dyn SemanticMatcher>) -> Self {
        Self { matcher }
    }

    /// Full semantic match. Blank input yields the zeroed result without any external call.
    /// Parse and transport failures of the matcher are returned as-is, never defaulted.
    pub async fn analyze(&self, input: &MatchInput) -> Result<MatchResult, MatchError> {
        let (resume, jd) = match input.validate() {
            Ok(texts) => texts,
            Err(MatchError::InvalidInput(reason)) => {
                warn!("Semantic match skipped: {reason}");
                return Ok(MatchResult::degenerate(MatchMode::Semantic, &reason));
            }
            Err(e) => return Err(e),
        };

        let evaluation = self.matcher.evaluate(resume, jd).await?;
        let result = assemble_semantic(evaluation);

        info!(
            "Semantic match: semantic={:.2}, coverage={:.2}, overall={:.2}",
            result.semantic_score, result.coverage_ratio, result.overall_score
        );
        Ok(result)
    }

    /// Match without the external service, using keyword sets as skill lists.
    pub fn analyze_heuristic(&self, input: &MatchInput) -> MatchResult {
        let (resume, jd) = match input.validate() {
            Ok(texts) => texts,
            Err(e) => {
                warn!("Heuristic match skipped: {e}");
                return MatchResult::degenerate(MatchMode::Heuristic, REQUIRED_FIELDS_GAP);
            }
        };

        let result = assemble_heuristic(&extract_keywords(resume), &extract_keywords(jd));

        info!(
            "Heuristic match: keyword_score={:.2}, coverage={:.2}, overall={:.2}",
            result.semantic_score, result.coverage_ratio, result.overall_score
        );
        result
    }

    /// Keyword preview. Never calls the external service.
    pub fn preview(&self, input: &MatchInput) -> PreviewReport {
        match input.validate() {
            Ok((resume, jd)) => preview_match(resume, jd),
            Err(_) => PreviewReport::degenerate(REQUIRED_FIELDS_GAP),
        }
    }
}
