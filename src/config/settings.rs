use crate::core::jobs::JobBoard;
use crate::utils::error::{GuideError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const MIN_API_KEY_LEN: usize = 10;

/// Fully resolved configuration handed to each component by the entry point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub llm: LlmSettings,
    pub knowledge: KnowledgeSettings,
    pub jobs: JobSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
    pub timeout_seconds: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            temperature: 0.2,
            max_output_tokens: 2048,
            top_p: 0.95,
            top_k: 64,
            timeout_seconds: 60,
        }
    }
}

impl LlmSettings {
    /// The key is only needed by commands that talk to the model, so it is
    /// checked here rather than in `validate`.
    pub fn require_api_key(&self) -> Result<&str> {
        let key = validation::validate_required_field("llm.api_key", &self.api_key)?;

        if key.trim().len() < MIN_API_KEY_LEN {
            return Err(GuideError::InvalidConfigValueError {
                field: "llm.api_key".to_string(),
                value: "<redacted>".to_string(),
                reason: format!("API key must be at least {} characters", MIN_API_KEY_LEN),
            });
        }

        if !key.starts_with("AIza") {
            tracing::warn!("⚠️ API key format may be incorrect. Gemini API keys typically start with 'AIza'.");
        }

        Ok(key.trim())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeSettings {
    pub domains_dir: String,
}

impl Default for KnowledgeSettings {
    fn default() -> Self {
        Self {
            domains_dir: "domain_data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSettings {
    pub timeout_seconds: u64,
    pub max_listings: usize,
    pub seed: Option<u64>,
    pub boards: Vec<JobBoard>,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            max_listings: 5,
            seed: None,
            boards: JobBoard::defaults(),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("llm.base_url", &self.llm.base_url)?;
        validation::validate_non_empty_string("llm.model", &self.llm.model)?;
        validation::validate_range("llm.temperature", self.llm.temperature, 0.0, 2.0)?;
        validation::validate_range("llm.top_p", self.llm.top_p, 0.0, 1.0)?;
        validation::validate_positive_number("llm.max_output_tokens", self.llm.max_output_tokens as usize, 1)?;
        validation::validate_positive_number("llm.top_k", self.llm.top_k as usize, 1)?;
        validation::validate_positive_number("llm.timeout_seconds", self.llm.timeout_seconds as usize, 1)?;

        validation::validate_path("knowledge.domains_dir", &self.knowledge.domains_dir)?;

        validation::validate_positive_number("jobs.timeout_seconds", self.jobs.timeout_seconds as usize, 1)?;
        validation::validate_positive_number("jobs.max_listings", self.jobs.max_listings, 1)?;
        for board in &self.jobs.boards {
            validation::validate_non_empty_string("jobs.boards.name", &board.name)?;
            validation::validate_url_template("jobs.boards.url_template", &board.url_template)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.llm.model, "gemini-2.0-flash");
        assert_eq!(settings.jobs.max_listings, 5);
        assert_eq!(settings.jobs.timeout_seconds, 10);
        assert_eq!(settings.jobs.boards.len(), 5);
    }

    #[test]
    fn test_out_of_range_sampling_is_rejected() {
        let mut settings = Settings::default();
        settings.llm.temperature = 3.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_api_key_checks() {
        let mut llm = LlmSettings::default();
        assert!(matches!(llm.require_api_key(), Err(GuideError::MissingConfigError { .. })));

        llm.api_key = Some("short".to_string());
        assert!(matches!(
            llm.require_api_key(),
            Err(GuideError::InvalidConfigValueError { .. })
        ));

        llm.api_key = Some("AIzaSyExampleExampleExample".to_string());
        assert_eq!(llm.require_api_key().unwrap(), "AIzaSyExampleExampleExample");
    }
}
