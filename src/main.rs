use career_guide::app::render::{self, ReportMeta};
use career_guide::config::{Command, OutputFormat};
use career_guide::utils::error::ErrorSeverity;
use career_guide::utils::{logger, validation::Validate};
use career_guide::{
    Cli, Counselor, GeminiClient, GuidanceGenerator, GuideError, JobFetcher, KnowledgeBase,
    Settings, TomlConfig,
};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting career-guide CLI");

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    if cli.verbose {
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    if let Err(e) = run(&cli, &settings).await {
        exit_with(&e);
    }

    Ok(())
}

fn load_settings(cli: &Cli) -> career_guide::Result<Settings> {
    let mut settings = match TomlConfig::discover(cli.config.as_deref())? {
        Some(config) => {
            tracing::info!("📁 Loaded configuration file");
            config.into_settings()
        }
        None => Settings::default(),
    };

    // 命令列參數優先於設定檔
    cli.apply_overrides(&mut settings);

    // 驗證配置
    settings.validate()?;
    Ok(settings)
}

async fn run(cli: &Cli, settings: &Settings) -> career_guide::Result<()> {
    match &cli.command {
        Command::Domains => {
            let kb = KnowledgeBase::load(&settings.knowledge.domains_dir);
            print!("{}", render::render_domains(&kb.domain_names()));
        }

        Command::Guide {
            domain,
            level,
            format,
            output,
        } => {
            let model = Arc::new(GeminiClient::new(&settings.llm)?);
            tracing::info!("✅ Career guidance system initialized");

            let kb = KnowledgeBase::load(&settings.knowledge.domains_dir);
            let profile = kb.profile_or_default(domain);
            if kb.find(domain).is_none() {
                tracing::warn!("Unknown domain '{}', available: {:?}", domain, kb.domain_names());
            }

            let generator = GuidanceGenerator::new(model);
            tracing::info!("🔄 Generating your personalized career guidance...");
            let guidance = generator.generate(domain, *level, &profile).await;

            let text = match format {
                OutputFormat::Markdown => render::render_guidance(&guidance, &ReportMeta::now(domain, *level)),
                OutputFormat::Json => serde_json::to_string_pretty(&guidance)?,
            };
            println!("{}", text);

            if let Some(path) = output {
                tokio::fs::write(path, &text).await?;
                tracing::info!("📁 Guidance saved to: {}", path.display());
            }
        }

        Command::Jobs { domain, format, .. } => {
            let fetcher = JobFetcher::new(&settings.jobs)?;
            tracing::info!("🔍 Fetching recent job listings...");
            let jobs = fetcher.fetch(domain).await;

            match format {
                OutputFormat::Markdown => print!("{}", render::render_jobs(domain, &jobs)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&jobs)?),
            }
        }

        Command::Ask { domain, question } => {
            if question.trim().is_empty() {
                return Err(GuideError::InvalidConfigValueError {
                    field: "question".to_string(),
                    value: question.clone(),
                    reason: "Question cannot be empty".to_string(),
                });
            }

            let counselor = Counselor::new(Arc::new(GeminiClient::new(&settings.llm)?));
            tracing::info!("🤔 Thinking...");
            let answer = counselor.answer(domain, question).await;
            print!("{}", render::render_answer(question, &answer));
        }
    }

    Ok(())
}

fn exit_with(e: &GuideError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ career-guide failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
