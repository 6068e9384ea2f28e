//! Document model: the normalized resume and job description the rule engine reads.
//!
//! Top-level section keys (`personalInfo`, `workExperience`, `education`, `skills`) are
//! required; a payload missing any of them is rejected by deserialization before the
//! engine runs. Everything below the section level is optional and tolerated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub professional_summary: Option<String>,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub configuration: LayoutConfiguration,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Skills arrive either as a flat list or split into hard/soft groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    Flat(Vec<String>),
    Partitioned {
        #[serde(default)]
        hard: Vec<String>,
        #[serde(default)]
        soft: Vec<String>,
    },
}

impl Default for Skills {
    fn default() -> Self {
        Skills::Flat(Vec::new())
    }
}

impl Skills {
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        let empty: &[String] = &[];
        let (first, second) = match self {
            Skills::Flat(items) => (items.as_slice(), empty),
            Skills::Partitioned { hard, soft } => (hard.as_slice(), soft.as_slice()),
        };
        first.iter().chain(second.iter())
    }

    /// Distinct, non-blank skills compared case-insensitively, in first-seen order.
    pub fn distinct(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for skill in self.iter() {
            let normalized = skill.trim().to_lowercase();
            if !normalized.is_empty() && !seen.contains(&normalized) {
                seen.push(normalized);
            }
        }
        seen
    }
}

/// Rendering metadata extracted from the source file by an upstream collaborator.
/// `None` means "unknown": formatting rules that need the field are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfiguration {
    #[serde(default)]
    pub columns: Option<u8>,
    #[serde(default)]
    pub font_family: Option<String>,
    /// Body font size in points.
    #[serde(default)]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub margins: Option<Margins>,
    #[serde(default)]
    pub has_images: Option<bool>,
    #[serde(default)]
    pub has_tables: Option<bool>,
    #[serde(default)]
    pub has_headers_footers: Option<bool>,
    #[serde(default)]
    pub file_size_bytes: Option<u64>,
    /// Section headers as rendered, top to bottom.
    #[serde(default)]
    pub section_order: Option<Vec<String>>,
}

/// Page margins in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Margins {
    pub fn uniform(inches: f32) -> Self {
        Self {
            top: inches,
            bottom: inches,
            left: inches,
            right: inches,
        }
    }

    pub fn all(&self) -> [f32; 4] {
        [self.top, self.bottom, self.left, self.right]
    }
}

impl ResumeDocument {
    /// All free text of the document, one fragment per line, in section order.
    /// This is what keyword matching and the page estimate read.
    pub fn full_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let info = &self.personal_info;
        for field in [&info.name, &info.email, &info.phone, &info.location] {
            push_opt(&mut parts, field);
        }
        push_opt(&mut parts, &self.professional_summary);

        for job in &self.work_experience {
            parts.push(&job.title);
            parts.push(&job.company);
            push_opt(&mut parts, &job.description);
            parts.extend(job.achievements.iter().map(String::as_str));
        }
        for edu in &self.education {
            parts.push(&edu.institution);
            parts.push(&edu.degree);
            push_opt(&mut parts, &edu.field);
        }
        parts.extend(self.skills.iter().map(String::as_str));
        for cert in &self.certifications {
            parts.push(&cert.name);
            push_opt(&mut parts, &cert.issuer);
        }
        for project in &self.projects {
            parts.push(&project.name);
            push_opt(&mut parts, &project.description);
            parts.extend(project.technologies.iter().map(String::as_str));
        }

        parts
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn word_count(&self) -> usize {
        self.full_text().split_whitespace().count()
    }
}

fn push_opt<'a>(parts: &mut Vec<&'a str>, field: &'a Option<String>) {
    if let Some(value) = field.as_deref() {
        parts.push(value);
    }
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}

// ────────────────────────────────────────────────────────────────────────────
// Job description
// ────────────────────────────────────────────────────────────────────────────

/// Longest first line still treated as a job title when no explicit title is sent.
const MAX_INFERRED_TITLE_WORDS: usize = 8;
const NON_TITLE_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Accepts either a bare string or `{ "text": ..., "title": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobDescriptionInput {
    Text(String),
    Structured(JobDescription),
}

impl From<JobDescriptionInput> for JobDescription {
    fn from(input: JobDescriptionInput) -> Self {
        match input {
            JobDescriptionInput::Text(text) => JobDescription::new(text),
            JobDescriptionInput::Structured(jd) => jd,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl JobDescription {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The explicit title, or the first line of a multi-line text when it reads like a
    /// heading: short, with no sentence or list punctuation. A single-line text is
    /// body copy, never a title.
    pub fn resolved_title(&self) -> Option<String> {
        if let Some(title) = self.title.as_deref() {
            let title = title.trim();
            return (!title.is_empty()).then(|| title.to_string());
        }
        let mut lines = self.text.lines().map(str::trim).filter(|l| !l.is_empty());
        let first_line = lines.next()?;
        lines.next()?;
        let heading_like = first_line.split_whitespace().count() <= MAX_INFERRED_TITLE_WORDS
            && !first_line.contains(NON_TITLE_PUNCTUATION);
        heading_like.then(|| first_line.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dates
// ────────────────────────────────────────────────────────────────────────────

/// Sort key for an experience end date. `Ongoing` orders after every `Ended` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EndDate {
    Ended(NaiveDate),
    Ongoing,
}

impl WorkExperience {
    /// `None` when the end date is present but unparseable, or absent on a past role.
    pub fn end_key(&self) -> Option<EndDate> {
        if self.current {
            return Some(EndDate::Ongoing);
        }
        let raw = self.end_date.as_deref()?;
        if is_ongoing_marker(raw) {
            return Some(EndDate::Ongoing);
        }
        parse_loose_date(raw).map(EndDate::Ended)
    }
}

fn is_ongoing_marker(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "present" | "current" | "now" | "ongoing"
    )
}

/// Parses the date shapes resumes actually contain. Month-only dates resolve to the
/// first of the month, year-only dates to January 1st.
pub fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    for (fmt, input) in [
        ("%Y-%m-%d", format!("{raw}-01")),
        ("%m/%Y/%d", format!("{raw}/01")),
        ("%b %Y %d", format!("{raw} 01")),
        ("%B %Y %d", format!("{raw} 01")),
    ] {
        if let Ok(date) = NaiveDate::parse_from_str(&input, fmt) {
            return Some(date);
        }
    }
    if raw.len() == 4 {
        if let Ok(year) = raw.parse::<i32>() {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loose_date_formats() {
        let jan_2020 = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert_eq!(parse_loose_date("2020-01-01"), jan_2020);
        assert_eq!(parse_loose_date("2020-01"), jan_2020);
        assert_eq!(parse_loose_date("01/2020"), jan_2020);
        assert_eq!(parse_loose_date("Jan 2020"), jan_2020);
        assert_eq!(parse_loose_date("January 2020"), jan_2020);
        assert_eq!(parse_loose_date("2020"), jan_2020);
        assert_eq!(parse_loose_date("sometime"), None);
        assert_eq!(parse_loose_date(""), None);
    }

    #[test]
    fn test_current_role_sorts_after_any_end_date() {
        let current = WorkExperience {
            current: true,
            ..Default::default()
        };
        let past = WorkExperience {
            end_date: Some("2023-06".to_string()),
            ..Default::default()
        };
        let present = WorkExperience {
            end_date: Some("Present".to_string()),
            ..Default::default()
        };
        assert!(current.end_key() > past.end_key());
        assert_eq!(present.end_key(), Some(EndDate::Ongoing));
    }

    #[test]
    fn test_skills_flat_and_partitioned_deserialize() {
        let flat: Skills = serde_json::from_str(r#"["Rust", "SQL"]"#).unwrap();
        assert_eq!(flat.distinct(), vec!["rust", "sql"]);

        let split: Skills =
            serde_json::from_str(r#"{"hard": ["Rust", "rust"], "soft": ["Mentoring"]}"#).unwrap();
        assert_eq!(split.distinct(), vec!["rust", "mentoring"]);
    }

    #[test]
    fn test_missing_required_section_is_rejected() {
        let json = r#"{
            "personalInfo": {},
            "workExperience": [],
            "education": []
        }"#;
        assert!(serde_json::from_str::<ResumeDocument>(json).is_err());
    }

    #[test]
    fn test_optional_sections_default() {
        let json = r#"{
            "personalInfo": {"name": "Ada Lovelace"},
            "workExperience": [],
            "education": [],
            "skills": []
        }"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert!(doc.professional_summary.is_none());
        assert!(doc.projects.is_empty());
        assert_eq!(doc.configuration, LayoutConfiguration::default());
    }

    #[test]
    fn test_job_description_accepts_plain_string() {
        let input: JobDescriptionInput = serde_json::from_str(r#""Backend Engineer""#).unwrap();
        let jd: JobDescription = input.into();
        assert_eq!(jd.text, "Backend Engineer");
        assert_eq!(jd.title, None);
    }

    #[test]
    fn test_heading_line_above_body_is_a_title() {
        let jd = JobDescription::new("Backend Engineer\nRequired: Rust, Kafka");
        assert_eq!(jd.resolved_title().as_deref(), Some("Backend Engineer"));
    }

    #[test]
    fn test_single_line_text_has_no_title() {
        assert_eq!(JobDescription::new("Python, Docker, and Kubernetes.").resolved_title(), None);
        assert_eq!(JobDescription::new("Backend Engineer").resolved_title(), None);
    }

    #[test]
    fn test_punctuated_first_line_is_not_a_title() {
        let jd = JobDescription::new("Requirements:\n- Rust\n- Kafka");
        assert_eq!(jd.resolved_title(), None);
        let jd = JobDescription::new("Python, Docker, Kubernetes.\nRemote friendly");
        assert_eq!(jd.resolved_title(), None);
    }

    #[test]
    fn test_long_first_line_is_not_a_title() {
        let jd = JobDescription::new(
            "We are a fast growing company looking for someone to join our platform team\nRust",
        );
        assert_eq!(jd.resolved_title(), None);
        assert_eq!(
            jd.with_title("  Platform Engineer ").resolved_title().as_deref(),
            Some("Platform Engineer")
        );
    }

    #[test]
    fn test_full_text_includes_every_section() {
        let doc = ResumeDocument {
            professional_summary: Some("Backend engineer.".to_string()),
            work_experience: vec![WorkExperience {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                achievements: vec!["Cut costs 20%".to_string()],
                ..Default::default()
            }],
            skills: Skills::Flat(vec!["Kubernetes".to_string()]),
            projects: vec![Project {
                name: "ledger".to_string(),
                technologies: vec!["Postgres".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let text = doc.full_text();
        for needle in ["Backend engineer.", "Acme", "Cut costs 20%", "Kubernetes", "Postgres"] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }
}
