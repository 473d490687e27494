mod commands;

use clap::{Parser, Subcommand};
use std::sync::Arc;
use tally_core::{
    config,
    language::LanguageCode,
    traits::{SessionStorage, TracingReporter, TranslationSource},
};
use tally_i18n::{
    CacheWindows, FileSessionStorage, I18nContext, I18nService, MemorySessionStorage,
    SESSION_LANGUAGE_KEY,
};
use tally_providers::{DirectorySource, HttpTranslationSource};

use commands::DateStyle;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Tally: translate keys, categories, and dates for the expense tracker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: String,

    /// Session language for this run only.
    #[arg(short, long, global = true)]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a dotted key.
    T {
        key: String,
        /// Text to show when the key is missing.
        #[arg(long)]
        fallback: Option<String>,
        /// Placeholder value, `name=value`. Repeatable.
        #[arg(long = "var")]
        vars: Vec<String>,
    },
    /// Display name for a category.
    Category {
        name: String,
        /// JSON file with the user's categories.
        #[arg(long)]
        categories: Option<String>,
    },
    /// Display description for a category.
    Describe {
        description: String,
        name: String,
        #[arg(long)]
        categories: Option<String>,
    },
    /// Format a date or timestamp.
    Date {
        value: String,
        #[arg(long, value_enum, default_value_t = DateStyle::Short)]
        style: DateStyle,
    },
    /// List selectable languages.
    Languages,
    /// Show or set the session language.
    Session { code: Option<String> },
    /// List translation keys.
    Keys { prefix: Option<String> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load(&cli.config);
    let level = cfg
        .as_ref()
        .map(|c| c.tally.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
    let cfg = cfg?;

    let mut ctx = I18nContext::new();
    ctx.install(build_service(&cfg, cli.lang.as_deref())?);
    let i18n = ctx.require()?;
    if i18n.is_authenticated() {
        i18n.settle().await;
    }

    let output = match cli.command {
        Commands::T {
            key,
            fallback,
            vars,
        } => commands::translate(i18n, &key, fallback.as_deref(), &vars)?,
        Commands::Category { name, categories } => {
            let cats = commands::load_categories(categories.as_deref())?;
            commands::category(i18n, &name, cats.as_deref())
        }
        Commands::Describe {
            description,
            name,
            categories,
        } => {
            let cats = commands::load_categories(categories.as_deref())?;
            commands::describe(i18n, &description, &name, cats.as_deref())
        }
        Commands::Date { value, style } => commands::date(i18n, &value, style),
        Commands::Languages => commands::languages(i18n).await,
        Commands::Session { code } => commands::session(i18n, code.as_deref())?,
        Commands::Keys { prefix } => commands::keys(i18n, prefix.as_deref()),
    };
    println!("{output}");

    ctx.shutdown();
    Ok(())
}

/// Build the engine from config. `--lang` wins over the stored session language
/// without overwriting it.
fn build_service(cfg: &config::Config, lang: Option<&str>) -> anyhow::Result<I18nService> {
    let (source, authenticated) = build_source(cfg)?;
    tracing::debug!(
        "using {} translation source (authenticated: {authenticated})",
        source.name()
    );

    let storage: Arc<dyn SessionStorage> = match lang {
        Some(code) => {
            let language = LanguageCode::parse(code)
                .ok_or_else(|| anyhow::anyhow!("unsupported language '{code}'"))?;
            let memory = MemorySessionStorage::new();
            memory.write(SESSION_LANGUAGE_KEY, language.as_str())?;
            Arc::new(memory)
        }
        None if cfg.i18n.remember_session => Arc::new(FileSessionStorage::new(cfg.session_dir())),
        None => Arc::new(MemorySessionStorage::new()),
    };

    Ok(I18nService::create(
        cfg.i18n.default_language(),
        authenticated,
        source,
        storage,
        Arc::new(TracingReporter),
        CacheWindows {
            fresh: cfg.i18n.fresh_for(),
            retain: cfg.i18n.retain_for(),
        },
    ))
}

/// A translations directory wins over the API; the API only counts when a token is set.
fn build_source(cfg: &config::Config) -> anyhow::Result<(Arc<dyn TranslationSource>, bool)> {
    let dir = cfg.api.translations_dir.trim();
    if !dir.is_empty() {
        let source: Arc<dyn TranslationSource> =
            Arc::new(DirectorySource::new(config::shellexpand(dir)));
        return Ok((source, true));
    }
    let source: Arc<dyn TranslationSource> = Arc::new(HttpTranslationSource::from_config(&cfg.api)?);
    Ok((source, cfg.api.is_authenticated()))
}
