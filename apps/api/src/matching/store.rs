//! Match persistence: stores a snapshot of each completed match.
//!
//! The engine never touches storage; handlers hand finished results to a `MatchStore`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::matching::engine::MatchInput;
use crate::matching::result::MatchResult;
use crate::models::match_record::MatchRecordRow;

/// Snapshot of one match, ready to insert. Identifier and timestamp are assigned here.
#[derive(Debug, Clone)]
pub struct NewMatchRecord {
    pub record: MatchRecordRow,
}

impl NewMatchRecord {
    pub fn new(input: &MatchInput, result: &MatchResult, user_id: Option<String>) -> Self {
        let result = result.clone();
        Self {
            record: MatchRecordRow {
                id: Uuid::new_v4(),
                created_at: Utc::now(),
                resume_text: input.resume_text.clone(),
                job_description_text: input.job_description_text.clone(),
                match_mode: result.mode.as_str().to_string(),
                semantic_score: result.semantic_score,
                coverage_ratio: result.coverage_ratio,
                overall_score: result.overall_score,
                resume_skills: result.resume_skills,
                role_skills: result.role_skills,
                covered_skills: result.covered_skills,
                missing_skills: result.missing_skills,
                strengths: result.strengths,
                gaps: result.gaps,
                suggestions: result.suggestions,
                user_id,
            },
        }
    }
}

#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn save(&self, new_record: NewMatchRecord) -> anyhow::Result<MatchRecordRow>;
    async fn get(&self, id: Uuid) -> anyhow::Result<Option<MatchRecordRow>>;
}

/// `MatchStore` over the `match_records` table. Each save is a single INSERT.
pub struct PgMatchStore {
    pool: PgPool,
}

impl PgMatchStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchStore for PgMatchStore {
    async fn save(&self, new_record: NewMatchRecord) -> anyhow::Result<MatchRecordRow> {
        let r = new_record.record;

        let row = sqlx::query_as::<_, MatchRecordRow>(
            r#"
            INSERT INTO match_records
                (id, created_at, resume_text, job_description_text, match_mode,
                 semantic_score, coverage_ratio, overall_score,
                 resume_skills, role_skills, covered_skills, missing_skills,
                 strengths, gaps, suggestions, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(r.id)
        .bind(r.created_at)
        .bind(&r.resume_text)
        .bind(&r.job_description_text)
        .bind(&r.match_mode)
        .bind(r.semantic_score)
        .bind(r.coverage_ratio)
        .bind(r.overall_score)
        .bind(&r.resume_skills)
        .bind(&r.role_skills)
        .bind(&r.covered_skills)
        .bind(&r.missing_skills)
        .bind(&r.strengths)
        .bind(&r.gaps)
        .bind(&r.suggestions)
        .bind(&r.user_id)
        .fetch_one(&self.pool)
        .await?;

        info!("Stored match record {} ({})", row.id, row.match_mode);
        Ok(row)
    }

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<MatchRecordRow>> {
        Ok(
            sqlx::query_as::<_, MatchRecordRow>("SELECT * FROM match_records WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}
