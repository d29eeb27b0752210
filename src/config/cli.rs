use crate::config::settings::Settings;
use crate::core::ExperienceLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "career-guide")]
#[command(about = "Career guidance plans, job leads and counseling backed by Gemini")]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to ./career-guide.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Gemini model name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Directory holding domain description files
    #[arg(long, global = true)]
    pub domains_dir: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the available domains
    Domains,

    /// Generate a career development plan
    Guide {
        #[arg(short, long)]
        domain: String,

        #[arg(short, long, value_enum, default_value = "beginner")]
        level: ExperienceLevel,

        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Also write the rendered plan to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch recent job listings
    Jobs {
        #[arg(short, long)]
        domain: String,

        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Seed for placeholder listings
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Ask a free-form career question
    Ask {
        #[arg(short, long)]
        domain: String,

        question: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl Cli {
    /// Command-line flags win over the configuration file.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            settings.llm.api_key = Some(key.clone());
        }
        if let Some(model) = &self.model {
            settings.llm.model = model.clone();
        }
        if let Some(dir) = &self.domains_dir {
            settings.knowledge.domains_dir = dir.clone();
        }
        if let Command::Jobs { seed: Some(seed), .. } = &self.command {
            settings.jobs.seed = Some(*seed);
        }
    }
}
