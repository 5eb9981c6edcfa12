//! Skill Normalizer: canonicalizes a raw skill phrase into a comparable token.

/// Characters removed outright before tokenizing.
const STRIPPED_PUNCTUATION: &[char] = &['.', ',', ';', ':', '(', ')'];

/// Filler words that decorate a skill without changing it ("Python experience" == "python").
const STOP_SUFFIXES: &[&str] = &[
    "experience",
    "experiences",
    "skills",
    "skill",
    "framework",
    "frameworks",
    "tools",
    "tooling",
    "knowledge",
    "background",
    "associate",
    "certification",
    "certifications",
];

/// Normalizes a skill phrase: trim, lowercase, strip punctuation, drop filler words,
/// collapse whitespace.
///
/// Total and idempotent. Returns an empty string for blank or all-filler input; callers
/// must discard empties before building a skill set.
pub fn normalize_skill(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    stripped
        .split_whitespace()
        .filter(|token| !STOP_SUFFIXES.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}
