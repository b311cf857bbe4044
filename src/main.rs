// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};

use crate::app_settings::{AiSettings, ProviderKind};
use crate::characters::{CharacterRegistry, Gender};
use crate::providers::catalog;
use crate::storage::{JsonFileStore, KeyValueStore};
use crate::translation::{TranslationRequest, TranslationService};

mod app_settings;
mod characters;
mod errors;
mod language_utils;
mod providers;
mod storage;
mod translation;

/// CLI wrapper for ProviderKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProvider {
    Gemini,
    OpenAI,
    Anthropic,
    Custom,
}

impl From<CliProvider> for ProviderKind {
    fn from(cli_provider: CliProvider) -> Self {
        match cli_provider {
            CliProvider::Gemini => ProviderKind::Gemini,
            CliProvider::OpenAI => ProviderKind::OpenAI,
            CliProvider::Anthropic => ProviderKind::Anthropic,
            CliProvider::Custom => ProviderKind::Custom,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text using the configured AI provider
    Translate(TranslateArgs),

    /// List supported providers and their published models
    Providers,

    /// Manage character gender hints
    Characters {
        #[command(subcommand)]
        action: CharacterAction,
    },
}

#[derive(Subcommand, Debug)]
enum CharacterAction {
    /// Add or update a character binding
    Set {
        /// Character name
        name: String,
        /// Grammatical gender (male or female)
        gender: String,
    },
    /// Remove a character binding
    Remove {
        /// Character name
        name: String,
    },
    /// List all character bindings
    List,
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: String,

    /// Source language code (e.g., 'en', 'ar', 'fr')
    #[arg(short, long)]
    source_language: String,

    /// Target language code (e.g., 'en', 'ar', 'fr')
    #[arg(short, long)]
    target_language: String,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the selected provider
    #[arg(long, env = "TARJOMAN_API_KEY")]
    api_key: Option<String>,

    /// Endpoint URL (required for the custom provider)
    #[arg(long)]
    endpoint: Option<String>,

    /// Skip the stored character registry hints
    #[arg(long)]
    no_characters: bool,

    /// Persist the provider settings used by this call
    #[arg(long)]
    save_settings: bool,
}

/// Tarjoman - AI translation assistant
///
/// Translates text using AI providers with style-aware prompts, character
/// gender hints, word-pair extraction, and a persistent translation cache.
#[derive(Parser, Debug)]
#[command(name = "tarjoman")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered translation assistant")]
#[command(long_about = "Tarjoman translates text using AI providers \
(Gemini, OpenAI, Anthropic, or a custom OpenAI-compatible endpoint).

EXAMPLES:
    tarjoman translate \"good morning\" -s en -t ar
    tarjoman translate \"صباح الخير\" -s ar -t en -p openai -m gpt-4
    tarjoman providers
    tarjoman characters set Maria female

CONFIGURATION:
    Provider settings, the character registry, and the translation cache are
    stored under the user configuration directory. Command line options
    override stored settings for a single call; pass --save-settings to
    persist them.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger { level });
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CommandLineOptions::parse();

    let log_level = cli
        .log_level
        .clone()
        .map(LevelFilter::from)
        .unwrap_or(LevelFilter::Info);
    CustomLogger::init(log_level)?;

    let store: Arc<dyn KeyValueStore> = Arc::new(
        JsonFileStore::in_user_config_dir().context("Failed to open the configuration store")?,
    );

    match cli.command {
        Commands::Translate(args) => run_translate(args, store).await,
        Commands::Providers => {
            run_providers();
            Ok(())
        }
        Commands::Characters { action } => {
            run_characters(action, store);
            Ok(())
        }
    }
}

async fn run_translate(args: TranslateArgs, store: Arc<dyn KeyValueStore>) -> Result<()> {
    language_utils::validate_language_code(&args.source_language)
        .context("Invalid source language")?;
    language_utils::validate_language_code(&args.target_language)
        .context("Invalid target language")?;

    // Load stored settings and apply command line overrides
    let mut settings = AiSettings::load(&store);
    if let Some(provider) = args.provider {
        settings.provider = provider.into();
    }
    if let Some(model) = args.model {
        settings.model = model;
    }
    if let Some(api_key) = args.api_key {
        settings.api_key = api_key;
    }
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
    }

    if args.save_settings {
        settings.save(&store);
        info!("Saved provider settings");
    }

    let mut request = TranslationRequest::new(
        &args.text,
        &args.source_language,
        &args.target_language,
    );
    if !args.no_characters {
        let registry = CharacterRegistry::load(store.clone());
        request = request.with_characters(registry.all());
    }

    let service = TranslationService::new(settings.clone(), store)
        .map_err(|e| anyhow!("{}", e))?;

    info!(
        "Translating with {} ({})",
        settings.provider.display_name(),
        settings.model
    );
    let result = service.translate(&request).await.map_err(|e| anyhow!("{}", e))?;

    if result.from_cache {
        info!("Served from the translation cache");
    }

    println!("{}", result.translated_text);

    if !result.word_pairs.is_empty() {
        println!("\nWord pairs:");
        for pair in &result.word_pairs {
            println!("  {} -> {}", pair.source, pair.target);
        }
    }

    if !result.corrections.is_empty() {
        println!("\nCorrections:");
        for correction in &result.corrections {
            println!(
                "  {:?} -> {:?} ({:?}, confidence {:.2})",
                correction.original, correction.corrected, correction.kind, correction.confidence
            );
        }
    }

    Ok(())
}

fn run_providers() {
    for kind in [
        ProviderKind::Gemini,
        ProviderKind::OpenAI,
        ProviderKind::Anthropic,
        ProviderKind::Custom,
    ] {
        let dossier = catalog::provider_info(kind);
        println!("{} ({})", dossier.name, kind);
        for model in dossier.models {
            println!("  {} - {}", model.id, model.name);
        }
        if dossier.custom_model_support {
            println!("  (accepts custom model names)");
        }
    }
}

fn run_characters(action: CharacterAction, store: Arc<dyn KeyValueStore>) {
    let registry = CharacterRegistry::load(store);
    match action {
        CharacterAction::Set { name, gender } => match Gender::from_str(&gender) {
            Ok(gender) => {
                registry.set(&name, gender);
                println!("Registered \"{}\" as {}", name, gender);
            }
            Err(e) => eprintln!("{}", e),
        },
        CharacterAction::Remove { name } => {
            registry.remove(&name);
            println!("Removed \"{}\"", name);
        }
        CharacterAction::List => {
            if registry.is_empty() {
                println!("No characters registered");
            } else {
                for (name, gender) in registry.all() {
                    println!("{} - {}", name, gender);
                }
            }
        }
    }
}
