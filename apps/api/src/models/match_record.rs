use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchRecordRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume_text: String,
    pub job_description_text: String,
    pub match_mode: String,
    pub semantic_score: f64,
    pub coverage_ratio: f64,
    pub overall_score: f64,
    pub resume_skills: Vec<String>,
    pub role_skills: Vec<String>,
    pub covered_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub suggestions: Vec<String>,
    pub user_id: Option<String>,
}
