//! Rule predicates, one module per category.
//!
//! Every rule sees the same read-only `RuleContext` and returns an `Outcome`. Rules do
//! not see each other's results.

pub mod content;
pub mod formatting;
pub mod keywords;
pub mod structure;

use crate::ats::catalog::{Issue, RuleCatalog, RuleId};
use crate::ats::document::{JobDescription, ResumeDocument};
use crate::ats::keywords::KeywordStats;
use crate::ats::settings::AtsSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    /// Prerequisite input is absent. Contributes nothing.
    Skip,
}

impl Outcome {
    pub(crate) fn fail_if(condition: bool) -> Self {
        if condition {
            Outcome::Fail
        } else {
            Outcome::Pass
        }
    }
}

pub struct RuleContext<'a> {
    pub document: &'a ResumeDocument,
    pub job: Option<&'a JobDescription>,
    /// Present only when a job description was supplied.
    pub keywords: Option<&'a KeywordStats>,
    pub settings: &'a AtsSettings,
}

pub fn evaluate(id: RuleId, ctx: &RuleContext<'_>) -> Outcome {
    match id {
        RuleId::SingleColumn => formatting::single_column(ctx),
        RuleId::StandardFont => formatting::standard_font(ctx),
        RuleId::FontSize => formatting::font_size(ctx),
        RuleId::Margins => formatting::margins(ctx),
        RuleId::NoImages => formatting::no_images(ctx),
        RuleId::NoTables => formatting::no_tables(ctx),
        RuleId::NoHeadersFooters => formatting::no_headers_footers(ctx),
        RuleId::FileSize => formatting::file_size(ctx),
        RuleId::SummaryPresent => content::summary_present(ctx),
        RuleId::SummaryLength => content::summary_length(ctx),
        RuleId::ExperienceDescriptions => content::experience_descriptions(ctx),
        RuleId::QuantifiedAchievements => content::quantified_achievements(ctx),
        RuleId::SkillsPresent => content::skills_present(ctx),
        RuleId::SkillsCount => content::skills_count(ctx),
        RuleId::ContactFormat => content::contact_format(ctx),
        RuleId::JobTitle => keywords::job_title(ctx),
        RuleId::KeywordMatch => keywords::keyword_match(ctx),
        RuleId::RequiredKeywords => keywords::required_keywords(ctx),
        RuleId::EssentialSections => structure::essential_sections(ctx),
        RuleId::SectionOrder => structure::section_order(ctx),
        RuleId::PageCount => structure::page_count(ctx),
        RuleId::SectionHeaders => structure::section_headers(ctx),
        RuleId::Chronology => structure::chronology(ctx),
    }
}

/// Runs every catalog rule and returns the fired issues in catalog order.
pub fn run_catalog(catalog: &RuleCatalog, ctx: &RuleContext<'_>) -> Vec<Issue> {
    catalog
        .entries()
        .iter()
        .filter(|entry| evaluate(entry.meta.id, ctx) == Outcome::Fail)
        .map(|entry| entry.to_issue())
        .collect()
}
