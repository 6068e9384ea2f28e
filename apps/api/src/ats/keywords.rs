//! Keyword Matcher: lexical overlap between a job description and the resume body.
//!
//! Algorithm:
//! 1. lower-case, strip punctuation (`+` and `#` survive so `c++` / `c#` stay distinct)
//! 2. split on whitespace, drop stop words, dedupe in first-seen order → `K` (JD), `D` (resume)
//! 3. ratio = |K ∩ D| / |K|, or 0 when `K` is empty
//! 4. missing = K \ D in JD order, capped
//!
//! Exact-token matching only; no stemming or synonyms.

use std::collections::HashSet;

use serde::Serialize;

use crate::ats::document::{JobDescription, ResumeDocument};

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "been", "being", "both", "but", "by", "can", "could", "did", "do", "does",
    "each", "etc", "for", "from", "had", "has", "have", "having", "he", "her", "his", "how", "i",
    "if", "in", "into", "is", "it", "its", "may", "me", "more", "most", "my", "no", "not", "of",
    "on", "or", "other", "our", "ours", "out", "over", "per", "she", "should", "so", "some",
    "such", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "under", "up", "us", "very", "was", "we", "well", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "within", "would",
    "you", "your", "yours",
];

/// Words that mark a JD line as listing requirements. Never keywords themselves.
const REQUIREMENT_MARKERS: &[&str] = &[
    "required",
    "requirement",
    "requirements",
    "require",
    "must",
    "musthave",
    "mandatory",
    "essential",
];

/// Generic phrasing around a requirement. Never a required term on its own.
const REQUIREMENT_FILLER: &[&str] = &[
    "years",
    "year",
    "experience",
    "professional",
    "knowledge",
    "strong",
    "ability",
    "skills",
    "qualifications",
    "proficiency",
    "understanding",
    "solid",
    "proven",
    "working",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStats {
    pub match_ratio: f64,
    pub matched_keywords: usize,
    pub total_keywords: usize,
    /// `K \ D` in JD order, capped at the configured maximum.
    pub missing_keywords: Vec<String>,
    /// Required terms absent from the resume, uncapped.
    pub required_missing: Vec<String>,
    /// Number of terms the JD explicitly marks as required.
    #[serde(skip)]
    pub required_total: usize,
}

impl KeywordStats {
    pub fn has_keywords(&self) -> bool {
        self.total_keywords > 0
    }
}

/// Lower-cases and strips punctuation, keeping `+` and `#`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '+' || *c == '#')
        .collect()
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Deduplicated keyword tokens in first-seen order.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut seen = HashSet::new();
    normalized
        .split_whitespace()
        .filter(|t| !is_stop_word(t))
        .filter(|t| seen.insert(t.to_string()))
        .map(str::to_string)
        .collect()
}

fn contains_token(tokens: &HashSet<String>, keyword: &str) -> bool {
    tokens.contains(keyword)
}

fn is_marker(token: &str) -> bool {
    REQUIREMENT_MARKERS.contains(&token)
}

/// `5+`, `10`: durations and counts, not skills.
fn is_numeric(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit() || c == '+')
}

fn is_requirement_term(token: &str) -> bool {
    !is_marker(token) && !is_numeric(token) && !REQUIREMENT_FILLER.contains(&token)
}

/// Required terms, in JD order. A line is a requirement when it carries a marker
/// inline (`Required: Rust`) or sits in a block opened by a marker header ending in
/// `:` (`Requirements:` followed by bullets). A block ends at a blank line or the next
/// header.
pub fn required_terms(jd_text: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    let mut in_block = false;

    for line in jd_text.lines().map(str::trim) {
        if line.is_empty() {
            in_block = false;
            continue;
        }

        let tokens = tokenize(line);
        let has_marker = tokens.iter().any(|t| is_marker(t));
        if line.ends_with(':') {
            in_block = has_marker;
            if !has_marker {
                continue;
            }
        } else if !has_marker && !in_block {
            continue;
        }

        for token in tokens {
            if is_requirement_term(&token) && !terms.contains(&token) {
                terms.push(token);
            }
        }
    }
    terms
}

/// Computes keyword overlap between a JD and a resume.
pub fn analyze(jd: &JobDescription, doc: &ResumeDocument, max_missing: usize) -> KeywordStats {
    let keywords: Vec<String> = tokenize(&jd.text)
        .into_iter()
        .filter(|t| !is_marker(t))
        .collect();
    let document_tokens: HashSet<String> = tokenize(&doc.full_text()).into_iter().collect();

    let (matched, missing): (Vec<&String>, Vec<&String>) = keywords
        .iter()
        .partition(|k| contains_token(&document_tokens, k));

    let match_ratio = if keywords.is_empty() {
        0.0
    } else {
        matched.len() as f64 / keywords.len() as f64
    };

    let required = required_terms(&jd.text);
    let required_missing: Vec<String> = required
        .iter()
        .filter(|t| !contains_token(&document_tokens, t))
        .cloned()
        .collect();

    KeywordStats {
        match_ratio,
        matched_keywords: matched.len(),
        total_keywords: keywords.len(),
        missing_keywords: missing.into_iter().take(max_missing).cloned().collect(),
        required_missing,
        required_total: required.len(),
    }
}
