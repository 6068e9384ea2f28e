//! Validation Orchestrator: the public entry point of the engine.
//!
//! `AtsValidator` owns an immutable, validated catalog behind an `Arc` and holds no
//! other state. Clone it into every worker; calls never coordinate.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::ats::analyzer::{Band, Benchmarks, ScoreAnalyzer};
use crate::ats::catalog::{CatalogError, Issue, RuleCatalog};
use crate::ats::document::{JobDescription, ResumeDocument};
use crate::ats::keywords::{self, KeywordStats};
use crate::ats::rules::{run_catalog, RuleContext};
use crate::ats::scoring::compute_score;
use crate::ats::settings::AtsSettings;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub score: u32,
    pub level: Band,
    pub description: String,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    pub benchmarks: Benchmarks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_analysis: Option<KeywordStats>,
}

#[derive(Debug, Clone)]
pub struct AtsValidator {
    catalog: Arc<RuleCatalog>,
    analyzer: ScoreAnalyzer,
}

impl AtsValidator {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        let analyzer = ScoreAnalyzer::new(catalog.settings().bands);
        Self { catalog, analyzer }
    }

    /// Builds and validates a catalog from settings. Fails on misconfiguration.
    pub fn from_settings(settings: AtsSettings) -> Result<Self, CatalogError> {
        Ok(Self::new(Arc::new(RuleCatalog::new(settings)?)))
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Rule catalog → keyword matcher → scoring → band analysis. Total for any
    /// well-formed document.
    pub fn validate(
        &self,
        document: &ResumeDocument,
        job: Option<&JobDescription>,
    ) -> ValidationResult {
        let settings = self.catalog.settings();

        let stats =
            job.map(|jd| keywords::analyze(jd, document, settings.max_missing_keywords));

        let ctx = RuleContext {
            document,
            job,
            keywords: stats.as_ref(),
            settings,
        };
        let mut issues = run_catalog(&self.catalog, &ctx);
        issues.sort_by_key(Issue::sort_key);

        let score = compute_score(&issues);
        let profile = self.analyzer.analyze(score);
        let keyword_analysis = stats.filter(KeywordStats::has_keywords);
        let missing: &[String] = keyword_analysis
            .as_ref()
            .map(|k| k.missing_keywords.as_slice())
            .unwrap_or(&[]);
        let recommendations = self.analyzer.recommendations(score, &issues, missing);

        debug!(
            score,
            level = ?profile.level,
            issues = issues.len(),
            with_job_description = job.is_some(),
            "ATS validation complete"
        );

        ValidationResult {
            score,
            level: profile.level,
            description: profile.description.to_string(),
            issues,
            recommendations,
            next_steps: profile.next_steps.iter().map(|s| s.to_string()).collect(),
            benchmarks: self.analyzer.benchmarks(),
            keyword_analysis,
        }
    }

    pub fn validate_batch<'a, I>(&self, items: I) -> Vec<ValidationResult>
    where
        I: IntoIterator<Item = (&'a ResumeDocument, Option<&'a JobDescription>)>,
    {
        items
            .into_iter()
            .map(|(document, job)| self.validate(document, job))
            .collect()
    }
}
