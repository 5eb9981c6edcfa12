// Skill matching and scoring engine.
// Implements: skill normalization, coverage algebra, semantic (LLM) evaluation,
// score combination, heuristic keyword preview, result assembly, persistence.
// All LLM calls go through llm_client, no direct HTTP calls here.

pub mod engine;
pub mod error;
pub mod handlers;
pub mod keywords;
pub mod normalize;
pub mod prompts;
pub mod result;
pub mod scoring;
pub mod semantic;
pub mod skill_set;
pub mod store;

pub use error::MatchError;
