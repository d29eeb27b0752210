#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Cli, Command, OutputFormat};
pub use settings::{JobSettings, KnowledgeSettings, LlmSettings, Settings};
pub use toml_config::TomlConfig;
