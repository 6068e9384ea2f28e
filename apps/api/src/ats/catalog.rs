//! Rule Catalog: the fixed, versioned set of ATS checks and their metadata.
//!
//! Category and severity are closed enums so the weight table and issue ordering are
//! exhaustive matches. Rule text lives here; rule predicates live in `ats::rules`.
//!
//! A catalog is built once at startup from `AtsSettings` and validated eagerly: a bad
//! weight or threshold is a startup failure, never a request-time one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ats::settings::AtsSettings;

pub const ATS_CATALOG_VERSION: &str = "2024.1";

// ────────────────────────────────────────────────────────────────────────────
// Tags
// ────────────────────────────────────────────────────────────────────────────

/// Declaration order is the output order of issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Formatting,
    Content,
    Keywords,
    Structure,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Formatting,
        Category::Content,
        Category::Keywords,
        Category::Structure,
    ];
}

/// Declaration order is most to least severe, so ascending sort puts critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    // Formatting
    SingleColumn,
    StandardFont,
    FontSize,
    Margins,
    NoImages,
    NoTables,
    NoHeadersFooters,
    FileSize,
    // Content
    SummaryPresent,
    SummaryLength,
    ExperienceDescriptions,
    QuantifiedAchievements,
    SkillsPresent,
    SkillsCount,
    ContactFormat,
    // Keywords
    JobTitle,
    KeywordMatch,
    RequiredKeywords,
    // Structure
    EssentialSections,
    SectionOrder,
    PageCount,
    SectionHeaders,
    Chronology,
}

// ────────────────────────────────────────────────────────────────────────────
// Rule metadata
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub id: RuleId,
    pub category: Category,
    pub severity: Severity,
    pub message: &'static str,
    pub solution: &'static str,
    /// Positive phrasing of the rule for the best-practices guide.
    pub practice: &'static str,
}

/// Catalog order. Issues of equal category and severity keep this order.
pub const RULES: &[RuleMeta] = &[
    RuleMeta {
        id: RuleId::SingleColumn,
        category: Category::Formatting,
        severity: Severity::Critical,
        message: "Multi-column layout detected. ATS parsers read across columns and scramble the content.",
        solution: "Switch to a single-column layout and move sidebar content into the main flow.",
        practice: "Use a single-column layout",
    },
    RuleMeta {
        id: RuleId::StandardFont,
        category: Category::Formatting,
        severity: Severity::High,
        message: "Non-standard font family. Decorative fonts may not be recognized by ATS software.",
        solution: "Use a standard font such as Arial, Calibri, Garamond, Georgia, Helvetica or Times New Roman.",
        practice: "Use a standard, widely available font family",
    },
    RuleMeta {
        id: RuleId::FontSize,
        category: Category::Formatting,
        severity: Severity::Medium,
        message: "Body font size is outside the 10-12pt range.",
        solution: "Set the body text between 10pt and 12pt.",
        practice: "Keep body text between 10pt and 12pt",
    },
    RuleMeta {
        id: RuleId::Margins,
        category: Category::Formatting,
        severity: Severity::Low,
        message: "Page margins are outside the 0.5-1.25 inch range.",
        solution: "Set all margins between 0.5 and 1.25 inches.",
        practice: "Keep margins between 0.5 and 1.25 inches",
    },
    RuleMeta {
        id: RuleId::NoImages,
        category: Category::Formatting,
        severity: Severity::Critical,
        message: "Images or photos detected. ATS software cannot read images and may reject the file.",
        solution: "Remove photos, logos and graphics; express the same information as text.",
        practice: "Avoid images, photos and graphics",
    },
    RuleMeta {
        id: RuleId::NoTables,
        category: Category::Formatting,
        severity: Severity::High,
        message: "Tables detected. Table cells are frequently parsed out of order or dropped.",
        solution: "Replace tables with plain text lists.",
        practice: "Avoid tables; use plain text lists",
    },
    RuleMeta {
        id: RuleId::NoHeadersFooters,
        category: Category::Formatting,
        severity: Severity::Medium,
        message: "Content placed in page headers or footers is often ignored by ATS parsers.",
        solution: "Move contact details and other header/footer content into the document body.",
        practice: "Keep all content out of page headers and footers",
    },
    RuleMeta {
        id: RuleId::FileSize,
        category: Category::Formatting,
        severity: Severity::Low,
        message: "File size exceeds the upload limit many ATS platforms enforce.",
        solution: "Remove embedded media and export a text-based PDF or DOCX.",
        practice: "Keep the file small and text-based",
    },
    RuleMeta {
        id: RuleId::SummaryPresent,
        category: Category::Content,
        severity: Severity::High,
        message: "No professional summary. Recruiters and ATS ranking both rely on it for context.",
        solution: "Add a 2-5 sentence professional summary highlighting your experience and strengths.",
        practice: "Open with a concise professional summary",
    },
    RuleMeta {
        id: RuleId::SummaryLength,
        category: Category::Content,
        severity: Severity::Low,
        message: "Professional summary should be between 2 and 5 sentences.",
        solution: "Rewrite the summary as 2-5 focused sentences.",
        practice: "Keep the summary to 2-5 sentences",
    },
    RuleMeta {
        id: RuleId::ExperienceDescriptions,
        category: Category::Content,
        severity: Severity::Medium,
        message: "One or more work experience entries have no description.",
        solution: "Describe your responsibilities and scope for every position.",
        practice: "Describe every position you list",
    },
    RuleMeta {
        id: RuleId::QuantifiedAchievements,
        category: Category::Content,
        severity: Severity::Medium,
        message: "Too few quantified achievements. Numbers make impact concrete and scannable.",
        solution: "Add metrics to your achievements: percentages, amounts, counts or time saved.",
        practice: "Quantify achievements with numbers and percentages",
    },
    RuleMeta {
        id: RuleId::SkillsPresent,
        category: Category::Content,
        severity: Severity::Medium,
        message: "No skills listed. ATS keyword matching leans heavily on the skills section.",
        solution: "Add a skills section listing your technical and professional skills.",
        practice: "Include a dedicated skills section",
    },
    RuleMeta {
        id: RuleId::SkillsCount,
        category: Category::Content,
        severity: Severity::Low,
        message: "Skills list is too long and dilutes your strongest qualifications.",
        solution: "Trim the skills list to the most relevant items.",
        practice: "Keep the skills list focused on relevant items",
    },
    RuleMeta {
        id: RuleId::ContactFormat,
        category: Category::Content,
        severity: Severity::Medium,
        message: "Contact details are not in a recognizable format.",
        solution: "Use a standard email address (name@domain.com) and a phone number with digits only plus common separators.",
        practice: "Write contact details in standard formats",
    },
    RuleMeta {
        id: RuleId::JobTitle,
        category: Category::Keywords,
        severity: Severity::High,
        message: "The target job title does not appear in your resume.",
        solution: "Mention the exact job title in your summary or a matching role title.",
        practice: "Include the exact target job title",
    },
    RuleMeta {
        id: RuleId::KeywordMatch,
        category: Category::Keywords,
        severity: Severity::High,
        message: "Low keyword match with the job description.",
        solution: "Work the job description's terminology into your experience and skills where it is accurate.",
        practice: "Mirror the job description's keywords",
    },
    RuleMeta {
        id: RuleId::RequiredKeywords,
        category: Category::Keywords,
        severity: Severity::Critical,
        message: "Required qualifications from the job description are missing.",
        solution: "Address every required qualification you actually have, using the job description's wording.",
        practice: "Cover every required qualification explicitly",
    },
    RuleMeta {
        id: RuleId::EssentialSections,
        category: Category::Structure,
        severity: Severity::High,
        message: "Essential sections are missing (contact information, experience or education).",
        solution: "Include your name and contact details, work experience and education.",
        practice: "Include contact, experience and education sections",
    },
    RuleMeta {
        id: RuleId::SectionOrder,
        category: Category::Structure,
        severity: Severity::Medium,
        message: "Sections are not in the conventional order.",
        solution: "Order sections as contact, summary, experience, education, skills.",
        practice: "Order sections: contact, summary, experience, education, skills",
    },
    RuleMeta {
        id: RuleId::PageCount,
        category: Category::Structure,
        severity: Severity::Medium,
        message: "Estimated length is outside the recommended 1-2 pages.",
        solution: "Adjust content so the resume fills one to two pages.",
        practice: "Keep the resume to one or two pages",
    },
    RuleMeta {
        id: RuleId::SectionHeaders,
        category: Category::Structure,
        severity: Severity::Low,
        message: "Unconventional section headers. ATS software looks for standard names.",
        solution: "Use standard headers such as Summary, Experience, Education and Skills.",
        practice: "Use conventional section headers",
    },
    RuleMeta {
        id: RuleId::Chronology,
        category: Category::Structure,
        severity: Severity::Medium,
        message: "Work experience is not in reverse-chronological order.",
        solution: "List positions from most recent to oldest, with current roles first.",
        practice: "List experience in reverse-chronological order",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Issue
// ────────────────────────────────────────────────────────────────────────────

/// One triggered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(skip)]
    pub rule: RuleId,
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    pub solution: String,
    #[serde(skip)]
    pub score_impact: u32,
    #[serde(skip)]
    pub(crate) position: usize,
}

impl Issue {
    /// Output order: category, then severity (critical first), then catalog order.
    pub fn sort_key(&self) -> (Category, Severity, usize) {
        (self.category, self.severity, self.position)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("severity weight for {severity:?} must be within 0..=100, got {weight}")]
    InvalidWeight { severity: Severity, weight: i32 },

    #[error("band thresholds must satisfy 100 >= excellent > good > fair > 0, got {excellent}/{good}/{fair}")]
    InvalidBands { excellent: u32, good: u32, fair: u32 },

    #[error("keyword match ratio must be within [0, 1], got {0}")]
    InvalidMatchRatio(f64),

    #[error("words per page must be positive")]
    InvalidWordsPerPage,

    #[error("rule {0:?} is declared more than once")]
    DuplicateRule(RuleId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub meta: &'static RuleMeta,
    pub score_impact: u32,
    pub position: usize,
}

impl CatalogEntry {
    pub fn to_issue(&self) -> Issue {
        Issue {
            rule: self.meta.id,
            category: self.meta.category,
            severity: self.meta.severity,
            message: self.meta.message.to_string(),
            solution: self.meta.solution.to_string(),
            score_impact: self.score_impact,
            position: self.position,
        }
    }
}

/// Immutable, validated rule set plus the settings its rules read.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    settings: AtsSettings,
    entries: Vec<CatalogEntry>,
}

impl RuleCatalog {
    pub fn new(settings: AtsSettings) -> Result<Self, CatalogError> {
        validate_settings(&settings)?;

        let mut entries: Vec<CatalogEntry> = Vec::with_capacity(RULES.len());
        for (position, meta) in RULES.iter().enumerate() {
            if entries.iter().any(|e| e.meta.id == meta.id) {
                return Err(CatalogError::DuplicateRule(meta.id));
            }
            entries.push(CatalogEntry {
                meta,
                score_impact: weight_for(&settings, meta.severity),
                position,
            });
        }

        Ok(Self { settings, entries })
    }

    pub fn version(&self) -> &'static str {
        ATS_CATALOG_VERSION
    }

    pub fn settings(&self) -> &AtsSettings {
        &self.settings
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, id: RuleId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.meta.id == id)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |e| e.meta.category == category)
    }

    pub fn weight(&self, severity: Severity) -> u32 {
        weight_for(&self.settings, severity)
    }
}

fn raw_weight(settings: &AtsSettings, severity: Severity) -> i32 {
    let w = &settings.weights;
    match severity {
        Severity::Critical => w.critical,
        Severity::High => w.high,
        Severity::Medium => w.medium,
        Severity::Low => w.low,
    }
}

/// Only called on validated settings, where every weight is within 0..=100.
fn weight_for(settings: &AtsSettings, severity: Severity) -> u32 {
    raw_weight(settings, severity).clamp(0, 100) as u32
}

fn validate_settings(settings: &AtsSettings) -> Result<(), CatalogError> {
    for severity in [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ] {
        let weight = raw_weight(settings, severity);
        if !(0..=100).contains(&weight) {
            return Err(CatalogError::InvalidWeight { severity, weight });
        }
    }

    let b = settings.bands;
    if !(b.excellent <= 100 && b.excellent > b.good && b.good > b.fair && b.fair > 0) {
        return Err(CatalogError::InvalidBands {
            excellent: b.excellent,
            good: b.good,
            fair: b.fair,
        });
    }

    let ratio = settings.keyword_min_match_ratio;
    if !(0.0..=1.0).contains(&ratio) {
        return Err(CatalogError::InvalidMatchRatio(ratio));
    }

    if settings.words_per_page == 0 {
        return Err(CatalogError::InvalidWordsPerPage);
    }

    Ok(())
}
