// LLM prompt constants for the Matching module.
// The JSON-only rules come from llm_client::prompts and are appended at call time.

/// System prompt for resume/JD match evaluation.
pub const MATCH_SYSTEM: &str = "You are a senior AI hiring assistant. \
    You compare a candidate resume with a job description and output a structured JSON \
    object describing the match quality.";

/// Match evaluation prompt template. Replace `{resume_text}` and `{jd_text}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Analyze the following resume and job description and return ONLY a JSON object with this EXACT schema:
{
  "match_score": 0.0,
  "strengths": ["..."],
  "gaps": ["..."],
  "suggestions": ["..."],
  "resume_skills": ["..."],
  "role_skills": ["..."]
}

Definitions:
- "resume_skills": a flat list of key skills, tools, technologies, and domains explicitly stated or strongly implied in the resume.
- "role_skills": a flat list of key skills, tools, technologies, and domains explicitly required or strongly preferred in the job description.
- Do not include soft fluff like "team player" unless it is clearly a requirement.

Rules:
- "match_score" must be a number between 0.0 and 1.0.
- "strengths", "gaps" and "suggestions" must be arrays of short, clear sentences.
- "resume_skills" and "role_skills" must be short skill tokens like "Python", "FastAPI", "microservices", never long sentences.

RESUME:
{resume_text}

JOB DESCRIPTION:
{jd_text}"#;

pub fn build_match_prompt(resume_text: &str, jd_text: &str) -> String {
    fill_template(
        MATCH_PROMPT_TEMPLATE,
        &[("{resume_text}", resume_text), ("{jd_text}", jd_text)],
    )
}

/// Substitutes placeholders in one pass over the template. Inserted values are never
/// rescanned, so user text containing a placeholder is left as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    loop {
        let next = values
            .iter()
            .filter_map(|(key, value)| rest.find(key).map(|at| (at, *key, *value)))
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, key, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + key.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_texts() {
        let prompt = build_match_prompt("RESUME BODY", "JD BODY");
        assert!(prompt.contains("RESUME:\nRESUME BODY"));
        assert!(prompt.contains("JOB DESCRIPTION:\nJD BODY"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{jd_text}"));
    }

    #[test]
    fn test_placeholder_text_inside_resume_is_not_substituted() {
        let prompt = build_match_prompt("I wrote {jd_text} once", "SECRET JD");
        assert_eq!(prompt.matches("SECRET JD").count(), 1);
        assert!(prompt.contains("RESUME:\nI wrote {jd_text} once"));
        assert!(prompt.ends_with("JOB DESCRIPTION:\nSECRET JD"));
    }

    #[test]
    fn test_placeholder_text_inside_jd_is_not_substituted() {
        let prompt = build_match_prompt("RESUME BODY", "Mention {resume_text} here");
        assert_eq!(prompt.matches("RESUME BODY").count(), 1);
        assert!(prompt.ends_with("JOB DESCRIPTION:\nMention {resume_text} here"));
    }

    #[test]
    fn test_prompt_names_every_required_field() {
        for field in [
            "match_score",
            "strengths",
            "gaps",
            "suggestions",
            "resume_skills",
            "role_skills",
        ] {
            assert!(MATCH_PROMPT_TEMPLATE.contains(field), "missing {field}");
        }
    }
}
