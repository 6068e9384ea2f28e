use serde::{Deserialize, Serialize};

/// Points deducted per fired issue, by severity. Signed so a bad override can be
/// caught by catalog validation instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityWeights {
    pub critical: i32,
    pub high: i32,
    pub medium: i32,
    pub low: i32,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            critical: 15,
            high: 8,
            medium: 4,
            low: 2,
        }
    }
}

/// Inclusive lower bounds of the three upper bands. Everything below `fair` is
/// "needs improvement".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub excellent: u32,
    pub good: u32,
    pub fair: u32,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            excellent: 85,
            good: 70,
            fair: 55,
        }
    }
}

/// Tunable knobs of the engine. Product-tuned constants, not derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsSettings {
    pub weights: SeverityWeights,
    pub bands: BandThresholds,
    /// Minimum `|K ∩ D| / |K|` for the keyword match rule to pass (inclusive).
    pub keyword_min_match_ratio: f64,
    /// Cap on the missing keyword list surfaced to the caller.
    pub max_missing_keywords: usize,
    pub min_quantified_achievements: usize,
    pub max_skills: usize,
    pub max_file_size_bytes: u64,
    /// Words on one page for the page-count estimate.
    pub words_per_page: usize,
}

impl Default for AtsSettings {
    fn default() -> Self {
        Self {
            weights: SeverityWeights::default(),
            bands: BandThresholds::default(),
            keyword_min_match_ratio: 0.6,
            max_missing_keywords: 10,
            min_quantified_achievements: 2,
            max_skills: 30,
            max_file_size_bytes: 2 * 1024 * 1024,
            words_per_page: 500,
        }
    }
}
