//! Static informational views derived from catalog metadata. No document input.

use serde::Serialize;

use crate::ats::catalog::{Category, RuleCatalog, RuleId, Severity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestPractices {
    pub formatting: Vec<String>,
    pub content: Vec<String>,
    pub keywords: Vec<String>,
    pub structure: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonIssue {
    pub problem: String,
    pub solution: String,
    pub impact: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummary {
    pub id: RuleId,
    pub category: Category,
    pub severity: Severity,
    pub score_impact: u32,
    pub message: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogOverview {
    pub version: String,
    pub rules: Vec<RuleSummary>,
}

pub fn best_practices(catalog: &RuleCatalog) -> BestPractices {
    let practices = |category: Category| -> Vec<String> {
        catalog
            .in_category(category)
            .map(|entry| entry.meta.practice.to_string())
            .collect()
    };
    BestPractices {
        formatting: practices(Category::Formatting),
        content: practices(Category::Content),
        keywords: practices(Category::Keywords),
        structure: practices(Category::Structure),
    }
}

/// Most severe first, catalog order within a severity.
pub fn common_issues(catalog: &RuleCatalog) -> Vec<CommonIssue> {
    let mut entries: Vec<_> = catalog.entries().iter().collect();
    entries.sort_by_key(|e| (e.meta.severity, e.position));
    entries
        .into_iter()
        .map(|entry| CommonIssue {
            problem: entry.meta.message.to_string(),
            solution: entry.meta.solution.to_string(),
            impact: entry.meta.severity,
        })
        .collect()
}

pub fn catalog_overview(catalog: &RuleCatalog) -> CatalogOverview {
    CatalogOverview {
        version: catalog.version().to_string(),
        rules: catalog
            .entries()
            .iter()
            .map(|entry| RuleSummary {
                id: entry.meta.id,
                category: entry.meta.category,
                severity: entry.meta.severity,
                score_impact: entry.score_impact,
                message: entry.meta.message.to_string(),
                solution: entry.meta.solution.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::catalog::RULES;
    use crate::ats::settings::AtsSettings;

    fn catalog() -> RuleCatalog {
        RuleCatalog::new(AtsSettings::default()).unwrap()
    }

    #[test]
    fn test_best_practices_cover_every_rule() {
        let guide = best_practices(&catalog());
        let total =
            guide.formatting.len() + guide.content.len() + guide.keywords.len() + guide.structure.len();
        assert_eq!(total, RULES.len());
        assert!(guide
            .formatting
            .contains(&"Use a single-column layout".to_string()));
    }

    #[test]
    fn test_common_issues_most_severe_first() {
        let issues = common_issues(&catalog());
        assert_eq!(issues.len(), RULES.len());
        assert_eq!(issues[0].impact, Severity::Critical);
        assert!(issues.windows(2).all(|w| w[0].impact <= w[1].impact));
    }

    #[test]
    fn test_common_issue_wire_shape() {
        let issues = common_issues(&catalog());
        let json = serde_json::to_value(&issues[0]).unwrap();
        assert!(json["problem"].is_string());
        assert!(json["solution"].is_string());
        assert_eq!(json["impact"], "critical");
    }

    #[test]
    fn test_catalog_overview_reports_weights() {
        let overview = catalog_overview(&catalog());
        let chronology = overview
            .rules
            .iter()
            .find(|r| r.id == RuleId::Chronology)
            .unwrap();
        assert_eq!(chronology.category, Category::Structure);
        assert_eq!(chronology.score_impact, 4);
    }
}
