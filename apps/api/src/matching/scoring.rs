/// Weight of the semantic (LLM) score in the overall score.
pub const SEMANTIC_WEIGHT: f64 = 0.65;
/// Weight of the skill coverage ratio in the overall score.
pub const COVERAGE_WEIGHT: f64 = 0.35;

/// Overall score: 0.65*semantic + 0.35*coverage.
/// Both inputs must already lie in [0, 1]; the result is clamped to guard float drift.
pub fn combine(semantic_score: f64, coverage_ratio: f64) -> f64 {
    (SEMANTIC_WEIGHT * semantic_score + COVERAGE_WEIGHT * coverage_ratio).clamp(0.0, 1.0)
}

/// Rounds to two decimal places, as used for the keyword match score.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
