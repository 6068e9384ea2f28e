//! Content rules: summary, experience descriptions, quantified impact, skills, contact syntax.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ats::document::is_blank;
use crate::ats::rules::{Outcome, RuleContext};

const SUMMARY_SENTENCES: (usize, usize) = (2, 5);
const MIN_PHONE_DIGITS: usize = 7;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)").unwrap());
static QUANTIFIED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9%]").unwrap());
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9()\s.\-]+$").unwrap());

/// Counts sentences; a trailing fragment without a terminator still counts.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END
        .split(text.trim())
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count()
}

/// A number or percent sign anywhere in the text.
pub fn is_quantified(text: &str) -> bool {
    QUANTIFIED.is_match(text)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    PHONE.is_match(phone) && digits >= MIN_PHONE_DIGITS
}

pub fn summary_present(ctx: &RuleContext<'_>) -> Outcome {
    Outcome::fail_if(is_blank(ctx.document.professional_summary.as_deref()))
}

pub fn summary_length(ctx: &RuleContext<'_>) -> Outcome {
    let summary = ctx.document.professional_summary.as_deref();
    if is_blank(summary) {
        return Outcome::Skip;
    }
    let sentences = summary.map(count_sentences).unwrap_or(0);
    let (min, max) = SUMMARY_SENTENCES;
    Outcome::fail_if(!(min..=max).contains(&sentences))
}

pub fn experience_descriptions(ctx: &RuleContext<'_>) -> Outcome {
    let jobs = &ctx.document.work_experience;
    if jobs.is_empty() {
        return Outcome::Skip;
    }
    Outcome::fail_if(jobs.iter().any(|j| is_blank(j.description.as_deref())))
}

pub fn quantified_achievements(ctx: &RuleContext<'_>) -> Outcome {
    let quantified = ctx
        .document
        .work_experience
        .iter()
        .flat_map(|j| j.achievements.iter())
        .filter(|a| is_quantified(a))
        .count();
    Outcome::fail_if(quantified < ctx.settings.min_quantified_achievements)
}

pub fn skills_present(ctx: &RuleContext<'_>) -> Outcome {
    Outcome::fail_if(ctx.document.skills.distinct().is_empty())
}

pub fn skills_count(ctx: &RuleContext<'_>) -> Outcome {
    let distinct = ctx.document.skills.distinct().len();
    if distinct == 0 {
        return Outcome::Skip;
    }
    Outcome::fail_if(distinct > ctx.settings.max_skills)
}

/// Only checks the fields that are present; absence is the structure rule's concern.
pub fn contact_format(ctx: &RuleContext<'_>) -> Outcome {
    let info = &ctx.document.personal_info;
    let email = info.email.as_deref().filter(|e| !e.trim().is_empty());
    let phone = info.phone.as_deref().filter(|p| !p.trim().is_empty());
    if email.is_none() && phone.is_none() {
        return Outcome::Skip;
    }
    let bad_email = email.map(|e| !is_valid_email(e)).unwrap_or(false);
    let bad_phone = phone.map(|p| !is_valid_phone(p)).unwrap_or(false);
    Outcome::fail_if(bad_email || bad_phone)
}
