//! Skill Set Algebra: coverage of a role's skills by a candidate's skills.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::normalize::normalize_skill;

/// A deduplicated set of normalized skill tokens. Iterates in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Normalizes every phrase and keeps the non-empty results.
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            phrases
                .into_iter()
                .map(|p| normalize_skill(p.as_ref()))
                .filter(|token| !token.is_empty())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Coverage of a role's skill set by a resume's skill set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    /// role ∩ resume, sorted.
    pub covered: Vec<String>,
    /// role − resume, sorted.
    pub missing: Vec<String>,
    /// |covered| / |role|, or 0.0 for an empty role set.
    pub ratio: f64,
}

pub fn compute_coverage(resume: &SkillSet, role: &SkillSet) -> Coverage {
    let (covered, missing): (Vec<&str>, Vec<&str>) =
        role.iter().partition(|token| resume.contains(token));

    let ratio = if role.is_empty() {
        0.0
    } else {
        covered.len() as f64 / role.len() as f64
    };

    Coverage {
        covered: covered.into_iter().map(str::to_string).collect(),
        missing: missing.into_iter().map(str::to_string).collect(),
        ratio,
    }
}

/// Normalizes both phrase lists and computes coverage in one step.
pub fn skill_coverage<R, J, S>(resume_phrases: R, role_phrases: J) -> Coverage
where
    R: IntoIterator<Item = S>,
    J: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    compute_coverage(
        &SkillSet::from_phrases(resume_phrases),
        &SkillSet::from_phrases(role_phrases),
    )
}
