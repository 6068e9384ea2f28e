//! Keyword Strategy rules. Only evaluated when a job description is supplied and yields
//! at least one keyword; otherwise every rule here is skipped.

use crate::ats::keywords::{normalize, KeywordStats};
use crate::ats::rules::{Outcome, RuleContext};

fn active_stats<'a>(ctx: &RuleContext<'a>) -> Option<&'a KeywordStats> {
    ctx.job
        .and(ctx.keywords)
        .filter(|stats| stats.has_keywords())
}

/// Normalized, whitespace-collapsed, space-padded so `contains` respects word edges.
fn phrase_form(text: &str) -> String {
    let normalized = normalize(text);
    let words: Vec<&str> = normalized.split_whitespace().collect();
    format!(" {} ", words.join(" "))
}

pub fn job_title(ctx: &RuleContext<'_>) -> Outcome {
    if active_stats(ctx).is_none() {
        return Outcome::Skip;
    }
    let Some(title) = ctx.job.and_then(|jd| jd.resolved_title()) else {
        return Outcome::Skip;
    };
    let title = phrase_form(&title);
    if title.trim().is_empty() {
        return Outcome::Skip;
    }
    let body = phrase_form(&ctx.document.full_text());
    Outcome::fail_if(!body.contains(&title))
}

pub fn keyword_match(ctx: &RuleContext<'_>) -> Outcome {
    match active_stats(ctx) {
        Some(stats) => Outcome::fail_if(stats.match_ratio < ctx.settings.keyword_min_match_ratio),
        None => Outcome::Skip,
    }
}

pub fn required_keywords(ctx: &RuleContext<'_>) -> Outcome {
    match active_stats(ctx) {
        Some(stats) if stats.required_total > 0 => {
            Outcome::fail_if(!stats.required_missing.is_empty())
        }
        _ => Outcome::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::document::{JobDescription, ResumeDocument};
    use crate::ats::keywords::analyze;
    use crate::ats::rules::fixtures::clean_document;
    use crate::ats::settings::AtsSettings;

    fn check_with(
        doc: &ResumeDocument,
        jd: &JobDescription,
        settings: &AtsSettings,
        rule: fn(&RuleContext<'_>) -> Outcome,
    ) -> Outcome {
        let stats = analyze(jd, doc, settings.max_missing_keywords);
        let ctx = RuleContext {
            document: doc,
            job: Some(jd),
            keywords: Some(&stats),
            settings,
        };
        rule(&ctx)
    }

    fn check(
        doc: &ResumeDocument,
        jd: &JobDescription,
        rule: fn(&RuleContext<'_>) -> Outcome,
    ) -> Outcome {
        check_with(doc, jd, &AtsSettings::default(), rule)
    }

    #[test]
    fn test_job_title_found_case_insensitively() {
        let doc = clean_document();
        let jd = JobDescription::new("Rust observability").with_title("senior software ENGINEER");
        assert_eq!(check(&doc, &jd, job_title), Outcome::Pass);
    }

    #[test]
    fn test_job_title_missing() {
        let doc = clean_document();
        let jd = JobDescription::new("Rust observability").with_title("Staff Data Scientist");
        assert_eq!(check(&doc, &jd, job_title), Outcome::Fail);
    }

    #[test]
    fn test_job_title_respects_word_edges() {
        let doc = clean_document();
        let jd = JobDescription::new("Rust").with_title("Engine");
        assert_eq!(check(&doc, &jd, job_title), Outcome::Fail);
    }

    #[test]
    fn test_job_title_skipped_for_keyword_only_text() {
        let doc = clean_document();
        let jd = JobDescription::new("Python, Docker, and Kubernetes.");
        assert_eq!(check(&doc, &jd, job_title), Outcome::Skip);
    }

    #[test]
    fn test_job_title_inferred_from_heading_line() {
        let doc = clean_document();
        let jd = JobDescription::new("Senior Software Engineer\nRust, PostgreSQL");
        assert_eq!(check(&doc, &jd, job_title), Outcome::Pass);
    }

    #[test]
    fn test_ratio_at_threshold_passes() {
        let doc = clean_document();
        // rust, postgresql, observability matched; kafka, flink missing → 3/5 = 0.6
        let jd = JobDescription::new("Rust PostgreSQL Observability Kafka Flink");
        assert_eq!(check(&doc, &jd, keyword_match), Outcome::Pass);

        let stricter = AtsSettings {
            keyword_min_match_ratio: 0.61,
            ..AtsSettings::default()
        };
        assert_eq!(check_with(&doc, &jd, &stricter, keyword_match), Outcome::Fail);
    }

    #[test]
    fn test_two_thirds_match_passes_default_threshold() {
        let doc = clean_document();
        let jd = JobDescription::new("Rust, PostgreSQL, and Kubernetes.");
        assert_eq!(check(&doc, &jd, keyword_match), Outcome::Pass);
    }

    #[test]
    fn test_required_keywords() {
        let doc = clean_document();
        let jd = JobDescription::new("Platform Engineer\nRequired: Rust, Kubernetes");
        assert_eq!(check(&doc, &jd, required_keywords), Outcome::Fail);

        let covered = JobDescription::new("Platform Engineer\nRequired: Rust, PostgreSQL");
        assert_eq!(check(&doc, &covered, required_keywords), Outcome::Pass);

        let unmarked = JobDescription::new("Platform Engineer\nRust, Kubernetes");
        assert_eq!(check(&doc, &unmarked, required_keywords), Outcome::Skip);
    }

    #[test]
    fn test_empty_keyword_set_skips_all() {
        let doc = clean_document();
        let jd = JobDescription::new("the and of");
        let rules: [fn(&RuleContext<'_>) -> Outcome; 3] =
            [job_title, keyword_match, required_keywords];
        for rule in rules {
            assert_eq!(check(&doc, &jd, rule), Outcome::Skip);
        }
    }
}
