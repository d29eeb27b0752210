pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;
pub use config::{Settings, TomlConfig};

pub use adapters::GeminiClient;
pub use self::core::{
    counselor::Counselor, guidance::GuidanceGenerator, jobs::JobFetcher, knowledge::KnowledgeBase,
};
pub use utils::error::{GuideError, Result};
