//! Result Assembler: shapes coverage, semantic/heuristic output and the combined score
//! into the outward `MatchResult`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::keywords::build_preview;
use crate::matching::scoring::combine;
use crate::matching::semantic::SemanticEvaluation;
use crate::matching::skill_set::{compute_coverage, skill_coverage, SkillSet};

/// Which path produced a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Semantic,
    Heuristic,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Semantic => "semantic",
            MatchMode::Heuristic => "heuristic",
        }
    }
}

/// Full assessment of one resume against one job description.
/// Built fresh per request and never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub mode: MatchMode,
    pub semantic_score: f64,
    pub coverage_ratio: f64,
    pub overall_score: f64,
    pub resume_skills: Vec<String>,
    pub role_skills: Vec<String>,
    /// role ∩ resume by normalized form.
    pub covered_skills: Vec<String>,
    /// role − resume by normalized form.
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub suggestions: Vec<String>,
}

impl MatchResult {
    /// Zeroed result carrying a single gap message. No scoring happened.
    pub fn degenerate(mode: MatchMode, reason: &str) -> Self {
        Self {
            mode,
            semantic_score: 0.0,
            coverage_ratio: 0.0,
            overall_score: 0.0,
            resume_skills: vec![],
            role_skills: vec![],
            covered_skills: vec![],
            missing_skills: vec![],
            strengths: vec![],
            gaps: vec![reason.to_string()],
            suggestions: vec![],
        }
    }
}

/// Semantic mode: skill lists are the phrases returned by the LLM, verbatim.
pub fn assemble_semantic(evaluation: SemanticEvaluation) -> MatchResult {
    let coverage = skill_coverage(
        &evaluation.resume_skill_phrases,
        &evaluation.role_skill_phrases,
    );
    let overall_score = combine(evaluation.semantic_score, coverage.ratio);

    MatchResult {
        mode: MatchMode::Semantic,
        semantic_score: evaluation.semantic_score,
        coverage_ratio: coverage.ratio,
        overall_score,
        resume_skills: evaluation.resume_skill_phrases,
        role_skills: evaluation.role_skill_phrases,
        covered_skills: coverage.covered,
        missing_skills: coverage.missing,
        strengths: evaluation.strengths,
        gaps: evaluation.gaps,
        suggestions: evaluation.suggestions,
    }
}

/// Heuristic mode: skill lists are the full keyword sets and the keyword match score
/// stands in for the semantic score.
pub fn assemble_heuristic(
    resume_keywords: &BTreeSet<String>,
    role_keywords: &BTreeSet<String>,
) -> MatchResult {
    let preview = build_preview(resume_keywords, role_keywords);
    let coverage = compute_coverage(
        &SkillSet::from_phrases(resume_keywords),
        &SkillSet::from_phrases(role_keywords),
    );
    let overall_score = combine(preview.match_score, coverage.ratio);

    MatchResult {
        mode: MatchMode::Heuristic,
        semantic_score: preview.match_score,
        coverage_ratio: coverage.ratio,
        overall_score,
        resume_skills: resume_keywords.iter().cloned().collect(),
        role_skills: role_keywords.iter().cloned().collect(),
        covered_skills: coverage.covered,
        missing_skills: coverage.missing,
        strengths: preview.strengths,
        gaps: preview.gaps,
        suggestions: preview.suggestions,
    }
}
