use crate::config::settings::Settings;
use crate::core::jobs::JobBoard;
use crate::utils::error::{GuideError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "career-guide.toml";

/// On-disk configuration. Every section and key is optional and overrides
/// the matching default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub llm: Option<LlmSection>,
    pub knowledge: Option<KnowledgeSection>,
    pub jobs: Option<JobsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmSection {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeSection {
    pub domains_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobsSection {
    pub timeout_seconds: Option<u64>,
    pub max_listings: Option<usize>,
    pub seed: Option<u64>,
    pub boards: Option<Vec<JobBoard>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GuideError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GuideError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GuideError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Loads `path` if given, otherwise `career-guide.toml` when it exists.
    pub fn discover(path: Option<&Path>) -> Result<Option<Self>> {
        match path {
            Some(path) => Self::from_file(path).map(Some),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE).map(Some),
            None => Ok(None),
        }
    }

    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(llm) = &self.llm {
            // 未替換的 ${VAR} 視為未設定
            if let Some(key) = llm.api_key.as_ref().filter(|k| !k.starts_with("${")) {
                settings.llm.api_key = Some(key.clone());
            }
            if let Some(model) = &llm.model {
                settings.llm.model = model.clone();
            }
            if let Some(base_url) = &llm.base_url {
                settings.llm.base_url = base_url.clone();
            }
            if let Some(temperature) = llm.temperature {
                settings.llm.temperature = temperature;
            }
            if let Some(max_output_tokens) = llm.max_output_tokens {
                settings.llm.max_output_tokens = max_output_tokens;
            }
            if let Some(top_p) = llm.top_p {
                settings.llm.top_p = top_p;
            }
            if let Some(top_k) = llm.top_k {
                settings.llm.top_k = top_k;
            }
            if let Some(timeout) = llm.timeout_seconds {
                settings.llm.timeout_seconds = timeout;
            }
        }

        if let Some(dir) = self.knowledge.as_ref().and_then(|k| k.domains_dir.as_ref()) {
            settings.knowledge.domains_dir = dir.clone();
        }

        if let Some(jobs) = &self.jobs {
            if let Some(timeout) = jobs.timeout_seconds {
                settings.jobs.timeout_seconds = timeout;
            }
            if let Some(max_listings) = jobs.max_listings {
                settings.jobs.max_listings = max_listings;
            }
            if jobs.seed.is_some() {
                settings.jobs.seed = jobs.seed;
            }
            if let Some(boards) = &jobs.boards {
                settings.jobs.boards = boards.clone();
            }
        }
    }

    pub fn into_settings(self) -> Settings {
        let mut settings = Settings::default();
        self.apply_to(&mut settings);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[llm]
model = "gemini-1.5-pro"
temperature = 0.4

[knowledge]
domains_dir = "./domains"

[jobs]
max_listings = 3
seed = 42
"#;

        let settings = TomlConfig::from_toml_str(toml_content).unwrap().into_settings();

        assert_eq!(settings.llm.model, "gemini-1.5-pro");
        assert_eq!(settings.llm.temperature, 0.4);
        assert_eq!(settings.llm.top_k, 64);
        assert_eq!(settings.knowledge.domains_dir, "./domains");
        assert_eq!(settings.jobs.max_listings, 3);
        assert_eq!(settings.jobs.seed, Some(42));
        assert_eq!(settings.jobs.boards.len(), 5);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CAREER_GUIDE_TEST_KEY", "AIzaTestKeyFromEnvironment");

        let toml_content = r#"
[llm]
api_key = "${CAREER_GUIDE_TEST_KEY}"
"#;

        let settings = TomlConfig::from_toml_str(toml_content).unwrap().into_settings();
        assert_eq!(settings.llm.api_key.as_deref(), Some("AIzaTestKeyFromEnvironment"));

        std::env::remove_var("CAREER_GUIDE_TEST_KEY");
    }

    #[test]
    fn test_unset_env_var_leaves_key_missing() {
        let toml_content = r#"
[llm]
api_key = "${CAREER_GUIDE_SURELY_UNSET_VAR}"
"#;
        let settings = TomlConfig::from_toml_str(toml_content).unwrap().into_settings();
        assert!(settings.llm.api_key.is_none());
    }

    #[test]
    fn test_custom_boards() {
        let toml_content = r#"
[[jobs.boards]]
name = "RemoteOK"
url_template = "https://remoteok.com/remote-{domain}-jobs"
hyphenate = true
"#;

        let settings = TomlConfig::from_toml_str(toml_content).unwrap().into_settings();
        assert_eq!(settings.jobs.boards.len(), 1);
        assert!(settings.jobs.boards[0].hyphenate);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[llm]
base_url = "invalid-url"
"#;

        let settings = TomlConfig::from_toml_str(toml_content).unwrap().into_settings();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[llm\nmodel = ").unwrap_err();
        assert!(matches!(err, GuideError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[knowledge]\ndomains_dir = \"from-file\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.into_settings().knowledge.domains_dir, "from-file");
    }
}
