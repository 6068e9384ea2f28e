use std::str::FromStr;

use anyhow::{Context, Result};

use crate::ats::settings::{AtsSettings, BandThresholds, SeverityWeights};

/// Application configuration loaded from environment variables.
/// Every variable is optional; a value that does not parse fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ats: AtsSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            ats: AtsSettings::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let d = &defaults.ats;

        let ats = AtsSettings {
            weights: SeverityWeights {
                critical: env_or(&lookup, "ATS_WEIGHT_CRITICAL", d.weights.critical)?,
                high: env_or(&lookup, "ATS_WEIGHT_HIGH", d.weights.high)?,
                medium: env_or(&lookup, "ATS_WEIGHT_MEDIUM", d.weights.medium)?,
                low: env_or(&lookup, "ATS_WEIGHT_LOW", d.weights.low)?,
            },
            bands: BandThresholds {
                excellent: env_or(&lookup, "ATS_BAND_EXCELLENT", d.bands.excellent)?,
                good: env_or(&lookup, "ATS_BAND_GOOD", d.bands.good)?,
                fair: env_or(&lookup, "ATS_BAND_FAIR", d.bands.fair)?,
            },
            keyword_min_match_ratio: env_or(
                &lookup,
                "ATS_KEYWORD_MIN_RATIO",
                d.keyword_min_match_ratio,
            )?,
            max_missing_keywords: env_or(
                &lookup,
                "ATS_MAX_MISSING_KEYWORDS",
                d.max_missing_keywords,
            )?,
            min_quantified_achievements: env_or(
                &lookup,
                "ATS_MIN_QUANTIFIED_ACHIEVEMENTS",
                d.min_quantified_achievements,
            )?,
            max_skills: env_or(&lookup, "ATS_MAX_SKILLS", d.max_skills)?,
            max_file_size_bytes: env_or(&lookup, "ATS_MAX_FILE_SIZE_BYTES", d.max_file_size_bytes)?,
            words_per_page: env_or(&lookup, "ATS_WORDS_PER_PAGE", d.words_per_page)?,
        };

        Ok(Config {
            port: env_or(&lookup, "PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            ats,
        })
    }
}

fn env_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.ats, AtsSettings::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config = load(&[
            ("PORT", "9000"),
            ("ATS_WEIGHT_CRITICAL", "20"),
            ("ATS_BAND_EXCELLENT", "90"),
            ("ATS_KEYWORD_MIN_RATIO", "0.75"),
            ("ATS_WORDS_PER_PAGE", " 450 "),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.ats.weights.critical, 20);
        assert_eq!(config.ats.weights.high, 8);
        assert_eq!(config.ats.bands.excellent, 90);
        assert_eq!(config.ats.keyword_min_match_ratio, 0.75);
        assert_eq!(config.ats.words_per_page, 450);
    }

    #[test]
    fn test_unparseable_value_is_an_error() {
        let err = load(&[("ATS_WEIGHT_HIGH", "eight")]).unwrap_err();
        assert!(err.to_string().contains("ATS_WEIGHT_HIGH"));
        assert!(load(&[("PORT", "99999")]).is_err());
    }
}
