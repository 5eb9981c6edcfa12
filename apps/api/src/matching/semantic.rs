//! Semantic Match Client: asks the LLM to compare resume and JD, validates the answer.
//!
//! `SemanticMatcher` is the only I/O seam of the engine. `LlmSemanticMatcher` is the
//! production backend; tests swap in a deterministic stub.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::matching::prompts::{build_match_prompt, MATCH_SYSTEM};
use crate::matching::MatchError;

/// Validated output of one semantic evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticEvaluation {
    /// Always within [0, 1].
    pub semantic_score: f64,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub suggestions: Vec<String>,
    pub resume_skill_phrases: Vec<String>,
    pub role_skill_phrases: Vec<String>,
}

/// Wire shape the model is instructed to emit. Every field is required.
#[derive(Debug, Deserialize)]
pub struct RawEvaluation {
    pub match_score: f64,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub suggestions: Vec<String>,
    #[serde(alias = "cv_skills")]
    pub resume_skills: Vec<String>,
    #[serde(alias = "jd_skills")]
    pub role_skills: Vec<String>,
}

impl TryFrom<RawEvaluation> for SemanticEvaluation {
    type Error = MatchError;

    /// Rejects out-of-range scores instead of clamping them.
    fn try_from(raw: RawEvaluation) -> Result<Self, Self::Error> {
        if !(0.0..=1.0).contains(&raw.match_score) {
            return Err(MatchError::ExternalServiceParseFailure(format!(
                "match_score {} is outside [0, 1]",
                raw.match_score
            )));
        }

        Ok(SemanticEvaluation {
            semantic_score: raw.match_score,
            strengths: raw.strengths,
            gaps: raw.gaps,
            suggestions: raw.suggestions,
            resume_skill_phrases: raw.resume_skills,
            role_skill_phrases: raw.role_skills,
        })
    }
}

/// The semantic matcher trait. Implement this to swap backends without touching
/// the engine, handlers, or callers.
///
/// Carried in `MatchEngine` as `Arc<dyn SemanticMatcher>`.
#[async_trait]
pub trait SemanticMatcher: Send + Sync {
    async fn evaluate(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<SemanticEvaluation, MatchError>;
}

/// Semantic matcher backed by the chat-completion API. One request per evaluation.
pub struct LlmSemanticMatcher {
    llm: LlmClient,
    system: String,
}

impl LlmSemanticMatcher {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: format!("{MATCH_SYSTEM} {JSON_ONLY_SYSTEM}"),
        }
    }
}

#[async_trait]
impl SemanticMatcher for LlmSemanticMatcher {
    async fn evaluate(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<SemanticEvaluation, MatchError> {
        let prompt = build_match_prompt(resume_text, jd_text);
        let raw: RawEvaluation = self.llm.call_json(&prompt, &self.system).await?;
        let evaluation = SemanticEvaluation::try_from(raw)?;

        info!(
            "Semantic evaluation: score={:.2}, resume_skills={}, role_skills={}",
            evaluation.semantic_score,
            evaluation.resume_skill_phrases.len(),
            evaluation.role_skill_phrases.len()
        );

        Ok(evaluation)
    }
}
