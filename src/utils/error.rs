use thiserror::Error;

/// Failures while turning a model reply into a guidance record.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Model reply was empty")]
    EmptyReply,

    #[error("Could not find JSON object in response")]
    NoJsonObject,

    #[error("Malformed JSON after repair: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures of a single job board lookup.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {platform} failed: {source}")]
    Request {
        platform: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("No job listings matched on {platform}")]
    NoListings { platform: String },
}

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Response parsing error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Job fetch error: {0}")]
    FetchError(#[from] FetchError),

    #[error("LLM error: {message}")]
    LlmError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Upstream,
    Parsing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GuideError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GuideError::MissingConfigError { .. }
            | GuideError::InvalidConfigValueError { .. }
            | GuideError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            GuideError::ApiError(_) | GuideError::LlmError { .. } | GuideError::FetchError(_) => {
                ErrorCategory::Upstream
            }
            GuideError::ParseError(_) | GuideError::SerializationError(_) => ErrorCategory::Parsing,
            GuideError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Parsing => ErrorSeverity::Low,
            ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GuideError::MissingConfigError { field } => {
                format!("Set '{}' in career-guide.toml or pass it on the command line", field)
            }
            GuideError::InvalidConfigValueError { field, .. }
            | GuideError::ConfigValidationError { field, .. } => {
                format!("Check the value of '{}' in your configuration", field)
            }
            GuideError::ApiError(_) | GuideError::LlmError { .. } => {
                "Check your network connection and Gemini API key, then try again".to_string()
            }
            GuideError::FetchError(_) => "Job boards may be blocking automated requests; try again later".to_string(),
            GuideError::ParseError(_) | GuideError::SerializationError(_) => {
                "The model returned an unexpected format; retrying usually helps".to_string()
            }
            GuideError::IoError(_) => "Check file permissions and that the paths exist".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Upstream => format!("Could not reach an external service: {}", self),
            ErrorCategory::Parsing => format!("Could not understand the model reply: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;
