//! Structure rules: essential sections, section order and naming, length, chronology.

use serde::Serialize;
use strsim::levenshtein;

use crate::ats::document::is_blank;
use crate::ats::rules::{Outcome, RuleContext};

const PAGE_RANGE: (usize, usize) = (1, 2);
/// Edit distance still accepted as a conventional header ("Experiance", "Skils").
const HEADER_NEAR_MATCH_DISTANCE: usize = 2;
/// Shorter headers must match exactly; near-matching them is mostly noise.
const HEADER_NEAR_MATCH_MIN_LEN: usize = 5;

/// Resume sections ATS parsers recognize. Declaration order of the first five is the
/// expected top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Supplementary,
}

impl SectionKind {
    fn conventional_headers(&self) -> &'static [&'static str] {
        match self {
            SectionKind::Contact => &[
                "contact",
                "contact information",
                "contact info",
                "contact details",
                "personal information",
                "personal details",
            ],
            SectionKind::Summary => &[
                "summary",
                "professional summary",
                "career summary",
                "profile",
                "professional profile",
                "objective",
                "career objective",
            ],
            SectionKind::Experience => &[
                "experience",
                "work experience",
                "professional experience",
                "relevant experience",
                "employment history",
                "employment",
                "work history",
                "career history",
            ],
            SectionKind::Education => &[
                "education",
                "education and training",
                "academic background",
                "academic history",
            ],
            SectionKind::Skills => &[
                "skills",
                "technical skills",
                "key skills",
                "core skills",
                "core competencies",
                "competencies",
                "areas of expertise",
                "skills and abilities",
            ],
            SectionKind::Certifications => &[
                "certifications",
                "certificates",
                "licenses",
                "licenses and certifications",
                "certifications and licenses",
            ],
            SectionKind::Projects => &["projects", "personal projects", "key projects"],
            SectionKind::Supplementary => &[
                "awards",
                "honors",
                "honors and awards",
                "achievements",
                "publications",
                "volunteer experience",
                "volunteering",
                "languages",
                "interests",
                "activities",
                "leadership",
                "references",
            ],
        }
    }

    /// Position in the expected order, for the sections that have one.
    fn expected_rank(&self) -> Option<u8> {
        match self {
            SectionKind::Contact => Some(0),
            SectionKind::Summary => Some(1),
            SectionKind::Experience => Some(2),
            SectionKind::Education => Some(3),
            SectionKind::Skills => Some(4),
            _ => None,
        }
    }

    const ALL: [SectionKind; 8] = [
        SectionKind::Contact,
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Certifications,
        SectionKind::Projects,
        SectionKind::Supplementary,
    ];
}

fn normalize_header(header: &str) -> String {
    let replaced = header.to_lowercase().replace('&', " and ");
    let cleaned: String = replaced
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Exact match first, then the closest conventional name within the edit distance.
pub fn classify_header(header: &str) -> Option<SectionKind> {
    let header = normalize_header(header);
    if header.is_empty() {
        return None;
    }

    for kind in SectionKind::ALL {
        if kind.conventional_headers().contains(&header.as_str()) {
            return Some(kind);
        }
    }

    if header.chars().count() < HEADER_NEAR_MATCH_MIN_LEN {
        return None;
    }
    let header = header.as_str();
    SectionKind::ALL
        .iter()
        .flat_map(|kind| {
            kind.conventional_headers()
                .iter()
                .map(move |name| (levenshtein(header, name), *kind))
        })
        .filter(|(distance, _)| *distance <= HEADER_NEAR_MATCH_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, kind)| kind)
}

pub fn estimated_pages(word_count: usize, words_per_page: usize) -> usize {
    word_count.div_ceil(words_per_page.max(1))
}

pub fn essential_sections(ctx: &RuleContext<'_>) -> Outcome {
    let doc = ctx.document;
    let info = &doc.personal_info;
    let has_contact = !is_blank(info.name.as_deref())
        && (!is_blank(info.email.as_deref()) || !is_blank(info.phone.as_deref()));
    Outcome::fail_if(!has_contact || doc.work_experience.is_empty() || doc.education.is_empty())
}

pub fn section_order(ctx: &RuleContext<'_>) -> Outcome {
    let Some(headers) = ctx.document.configuration.section_order.as_ref() else {
        return Outcome::Skip;
    };
    let ranks: Vec<u8> = headers
        .iter()
        .filter_map(|h| classify_header(h))
        .filter_map(|kind| kind.expected_rank())
        .collect();
    if ranks.len() < 2 {
        return Outcome::Skip;
    }
    Outcome::fail_if(ranks.windows(2).any(|pair| pair[0] > pair[1]))
}

pub fn page_count(ctx: &RuleContext<'_>) -> Outcome {
    let pages = estimated_pages(ctx.document.word_count(), ctx.settings.words_per_page);
    let (min, max) = PAGE_RANGE;
    Outcome::fail_if(!(min..=max).contains(&pages))
}

pub fn section_headers(ctx: &RuleContext<'_>) -> Outcome {
    match ctx.document.configuration.section_order.as_ref() {
        Some(headers) if !headers.is_empty() => {
            Outcome::fail_if(headers.iter().any(|h| classify_header(h).is_none()))
        }
        _ => Outcome::Skip,
    }
}

/// Fires at most once, however many pairs are out of order.
pub fn chronology(ctx: &RuleContext<'_>) -> Outcome {
    let keys: Vec<_> = ctx
        .document
        .work_experience
        .iter()
        .filter_map(|job| job.end_key())
        .collect();
    if keys.len() < 2 {
        return Outcome::Skip;
    }
    Outcome::fail_if(keys.windows(2).any(|pair| pair[0] < pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::document::ResumeDocument;
    use crate::ats::rules::fixtures::clean_document;
    use crate::ats::settings::AtsSettings;

    fn check(doc: &ResumeDocument, rule: fn(&RuleContext<'_>) -> Outcome) -> Outcome {
        let settings = AtsSettings::default();
        let ctx = RuleContext {
            document: doc,
            job: None,
            keywords: None,
            settings: &settings,
        };
        rule(&ctx)
    }

    fn headers(names: &[&str]) -> Option<Vec<String>> {
        Some(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_classify_header_exact_and_near() {
        assert_eq!(classify_header("WORK EXPERIENCE:"), Some(SectionKind::Experience));
        assert_eq!(classify_header("Skills & Abilities"), Some(SectionKind::Skills));
        assert_eq!(classify_header("Experiance"), Some(SectionKind::Experience));
        assert_eq!(classify_header("Educaton"), Some(SectionKind::Education));
        assert_eq!(classify_header("My Journey"), None);
        assert_eq!(classify_header(""), None);
    }

    #[test]
    fn test_missing_education_fires_essential_sections() {
        let mut doc = clean_document();
        assert_eq!(check(&doc, essential_sections), Outcome::Pass);
        doc.education.clear();
        assert_eq!(check(&doc, essential_sections), Outcome::Fail);
    }

    #[test]
    fn test_contact_requires_name_and_a_channel() {
        let mut doc = clean_document();
        doc.personal_info.email = None;
        assert_eq!(check(&doc, essential_sections), Outcome::Pass);
        doc.personal_info.phone = Some(" ".to_string());
        assert_eq!(check(&doc, essential_sections), Outcome::Fail);
    }

    #[test]
    fn test_section_order() {
        let mut doc = clean_document();
        doc.configuration.section_order =
            headers(&["Contact", "Summary", "Projects", "Experience", "Education", "Skills"]);
        assert_eq!(check(&doc, section_order), Outcome::Pass);

        doc.configuration.section_order = headers(&["Contact", "Education", "Experience"]);
        assert_eq!(check(&doc, section_order), Outcome::Fail);

        doc.configuration.section_order = None;
        assert_eq!(check(&doc, section_order), Outcome::Skip);
    }

    #[test]
    fn test_unconventional_header_fires() {
        let mut doc = clean_document();
        doc.configuration.section_order = headers(&["Summary", "Where I've Been", "Education"]);
        assert_eq!(check(&doc, section_headers), Outcome::Fail);
    }

    #[test]
    fn test_estimated_pages() {
        assert_eq!(estimated_pages(0, 500), 0);
        assert_eq!(estimated_pages(1, 500), 1);
        assert_eq!(estimated_pages(500, 500), 1);
        assert_eq!(estimated_pages(501, 500), 2);
        assert_eq!(estimated_pages(1001, 500), 3);
    }

    #[test]
    fn test_overlong_resume_fires_page_count() {
        let mut doc = clean_document();
        assert_eq!(check(&doc, page_count), Outcome::Pass);
        doc.professional_summary = Some("word ".repeat(1200));
        assert_eq!(check(&doc, page_count), Outcome::Fail);
    }

    #[test]
    fn test_chronology_fires_once_for_many_misordered_pairs() {
        let mut doc = clean_document();
        assert_eq!(check(&doc, chronology), Outcome::Pass);
        doc.work_experience.reverse();
        assert_eq!(check(&doc, chronology), Outcome::Fail);
    }

    #[test]
    fn test_chronology_ignores_unparseable_dates() {
        let mut doc = clean_document();
        doc.work_experience[1].end_date = Some("a while ago".to_string());
        assert_eq!(check(&doc, chronology), Outcome::Pass);
    }
}
