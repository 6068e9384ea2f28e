//! Scoring Engine: deduction from a 100 baseline.
//!
//! score = clamp(100 − Σ score_impact, 0, 100). Deductions are independent: no
//! diminishing returns, no interaction between rules.

use crate::ats::catalog::Issue;

pub const BASELINE_SCORE: u32 = 100;

pub fn total_deduction(issues: &[Issue]) -> u32 {
    issues
        .iter()
        .fold(0u32, |acc, issue| acc.saturating_add(issue.score_impact))
}

pub fn compute_score(issues: &[Issue]) -> u32 {
    BASELINE_SCORE
        .saturating_sub(total_deduction(issues))
        .min(BASELINE_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::catalog::{RuleCatalog, RuleId};
    use crate::ats::settings::AtsSettings;

    fn issues(ids: &[RuleId]) -> Vec<Issue> {
        let catalog = RuleCatalog::new(AtsSettings::default()).unwrap();
        ids.iter()
            .map(|id| catalog.entry(*id).unwrap().to_issue())
            .collect()
    }

    #[test]
    fn test_no_issues_scores_baseline() {
        assert_eq!(compute_score(&[]), 100);
    }

    #[test]
    fn test_two_critical_issues() {
        let fired = issues(&[RuleId::SingleColumn, RuleId::NoImages]);
        assert_eq!(total_deduction(&fired), 30);
        assert_eq!(compute_score(&fired), 70);
    }

    #[test]
    fn test_high_plus_medium_is_twelve() {
        let fired = issues(&[RuleId::SummaryPresent, RuleId::SkillsPresent]);
        assert_eq!(compute_score(&fired), 88);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let catalog = RuleCatalog::new(AtsSettings::default()).unwrap();
        let every_rule: Vec<Issue> = catalog.entries().iter().map(|e| e.to_issue()).collect();
        assert!(total_deduction(&every_rule) > 100);
        assert_eq!(compute_score(&every_rule), 0);
    }

    #[test]
    fn test_deduction_is_order_independent() {
        let mut fired = issues(&[RuleId::NoTables, RuleId::Margins, RuleId::Chronology]);
        let forward = compute_score(&fired);
        fired.reverse();
        assert_eq!(compute_score(&fired), forward);
        assert_eq!(forward, 100 - 8 - 2 - 4);
    }

    #[test]
    fn test_removing_an_issue_never_lowers_score() {
        let fired = issues(&[
            RuleId::SingleColumn,
            RuleId::NoImages,
            RuleId::StandardFont,
            RuleId::SummaryPresent,
            RuleId::PageCount,
            RuleId::RequiredKeywords,
            RuleId::NoTables,
            RuleId::KeywordMatch,
        ]);
        let full = compute_score(&fired);
        for skip in 0..fired.len() {
            let fixed: Vec<Issue> = fired
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, issue)| issue.clone())
                .collect();
            assert!(compute_score(&fixed) >= full);
        }
    }
}
