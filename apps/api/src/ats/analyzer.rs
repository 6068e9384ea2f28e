//! Score Analyzer: maps a score to a qualitative band with fixed guidance.
//!
//! Bands are contiguous and non-overlapping over [0, 100]; the ladder is evaluated
//! top-down with inclusive lower bounds.

use serde::{Deserialize, Serialize};

use crate::ats::catalog::{Category, Issue};
use crate::ats::settings::BandThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandRange {
    pub min: u32,
    pub max: u32,
}

impl BandRange {
    pub fn contains(&self, score: u32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Benchmarks {
    pub excellent: BandRange,
    pub good: BandRange,
    pub fair: BandRange,
    pub poor: BandRange,
}

/// Fixed guidance for one band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandProfile {
    pub level: Band,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

static EXCELLENT: BandProfile = BandProfile {
    level: Band::Excellent,
    description: "Your resume is highly ATS-compatible and should parse cleanly in most applicant tracking systems.",
    recommendations: &[
        "Keep tailoring keywords to each job description you apply for.",
        "Review the remaining issues for final polish.",
    ],
    next_steps: &[
        "Submit your applications with confidence.",
        "Re-run validation after every significant edit.",
    ],
};

static GOOD: BandProfile = BandProfile {
    level: Band::Good,
    description: "Your resume is ATS-friendly with a few issues that may cost you ranking.",
    recommendations: &[
        "Fix the high-severity issues first; they carry the largest deductions.",
        "Mirror the job description's terminology where it is accurate.",
        "Quantify more of your achievements.",
    ],
    next_steps: &[
        "Address the listed issues, starting with the most severe.",
        "Re-validate against the specific job description you are targeting.",
    ],
};

static FAIR: BandProfile = BandProfile {
    level: Band::Fair,
    description: "Your resume has several issues that may cause ATS systems to misread or down-rank it.",
    recommendations: &[
        "Simplify formatting: single column, standard fonts, no tables or images.",
        "Use conventional section headers in the standard order.",
        "Add a professional summary and quantified achievements.",
    ],
    next_steps: &[
        "Resolve all critical and high-severity issues.",
        "Compare your resume against the job description and add missing keywords.",
        "Re-run validation to confirm the improvements.",
    ],
};

static NEEDS_IMPROVEMENT: BandProfile = BandProfile {
    level: Band::NeedsImprovement,
    description: "Your resume is likely to be filtered out or misparsed by ATS systems.",
    recommendations: &[
        "Rebuild the layout on a simple single-column template.",
        "Remove images, tables and header/footer content.",
        "Make sure contact details, experience and education are all present.",
        "Rewrite content around the job description's keywords and measurable results.",
    ],
    next_steps: &[
        "Start with the critical issues; each one costs the most points.",
        "Work through the remaining issues category by category.",
        "Re-validate after each round of changes.",
    ],
};

/// Band lookup and guidance. Holds only the thresholds, so it is freely copyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreAnalyzer {
    thresholds: BandThresholds,
}

impl ScoreAnalyzer {
    pub fn new(thresholds: BandThresholds) -> Self {
        Self { thresholds }
    }

    pub fn band_for(&self, score: u32) -> Band {
        let t = &self.thresholds;
        if score >= t.excellent {
            Band::Excellent
        } else if score >= t.good {
            Band::Good
        } else if score >= t.fair {
            Band::Fair
        } else {
            Band::NeedsImprovement
        }
    }

    /// Pure function of `score`.
    pub fn analyze(&self, score: u32) -> &'static BandProfile {
        match self.band_for(score) {
            Band::Excellent => &EXCELLENT,
            Band::Good => &GOOD,
            Band::Fair => &FAIR,
            Band::NeedsImprovement => &NEEDS_IMPROVEMENT,
        }
    }

    pub fn benchmarks(&self) -> Benchmarks {
        let t = &self.thresholds;
        Benchmarks {
            excellent: BandRange {
                min: t.excellent,
                max: 100,
            },
            good: BandRange {
                min: t.good,
                max: t.excellent.saturating_sub(1),
            },
            fair: BandRange {
                min: t.fair,
                max: t.good.saturating_sub(1),
            },
            poor: BandRange {
                min: 0,
                max: t.fair.saturating_sub(1),
            },
        }
    }

    /// Band recommendations followed by one line per category that produced issues.
    pub fn recommendations(
        &self,
        score: u32,
        issues: &[Issue],
        missing_keywords: &[String],
    ) -> Vec<String> {
        let mut recommendations: Vec<String> = self
            .analyze(score)
            .recommendations
            .iter()
            .map(|r| r.to_string())
            .collect();

        for category in Category::ALL {
            if issues.iter().any(|i| i.category == category) {
                recommendations.push(category_recommendation(category, missing_keywords));
            }
        }
        recommendations
    }
}

fn category_recommendation(category: Category, missing_keywords: &[String]) -> String {
    match category {
        Category::Formatting => {
            "Formatting: simplify the layout so every section can be parsed as plain text."
                .to_string()
        }
        Category::Content => {
            "Content: complete your summary, descriptions and skills, and quantify achievements."
                .to_string()
        }
        Category::Keywords if missing_keywords.is_empty() => {
            "Keywords: align your wording more closely with the job description.".to_string()
        }
        Category::Keywords => format!(
            "Keywords: consider adding these terms from the job description: {}.",
            missing_keywords.join(", ")
        ),
        Category::Structure => {
            "Structure: use standard sections in the conventional order and keep to 1-2 pages."
                .to_string()
        }
    }
}
