// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use ru2kz::app_config::{self, Config};
use ru2kz::app_controller::Controller;
use ru2kz::file_utils::FileManager;
use ru2kz::translation::classifier;
use ru2kz::translation::document::split_units;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show which lines would be sent for translation, without translating
    Check {
        /// Document to inspect
        #[arg(value_name = "INPUT_PATH")]
        input_path: Option<PathBuf>,
    },

    /// Generate shell completions for ru2kz
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct TranslateArgs {
    /// Document to translate [default: index.html]
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Where to write the translated document [default: <stem>.<target>.<ext>]
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    output: Option<PathBuf>,

    /// Maximum number of concurrent translation requests
    #[arg(short = 'j', long)]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Source language code
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code
    #[arg(short, long)]
    target_language: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Do not draw a progress bar
    #[arg(long)]
    no_progress: bool,
}

/// ru2kz - translate the Russian text of a document into Kazakh
///
/// Lines are translated independently; whitespace, markup-only lines, URLs,
/// numbers and Latin text are left untouched. Lines the translation service
/// cannot handle are kept as they are.
#[derive(Parser, Debug)]
#[command(name = "ru2kz")]
#[command(version)]
#[command(about = "Translate the Russian text of a document into Kazakh, keeping its layout")]
#[command(args_conflicts_with_subcommands = true)]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
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
    // Filtering is done by the max level, which is raised or lowered once
    // the configuration is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ru2kz", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Check { input_path }) => {
            run_check(input_path.unwrap_or_else(|| Config::default().input_path))
        }
        None => {
            // Reported once through the logger, then exit non-zero
            if let Err(e) = run_translate(cli.translate).await {
                error!("Translation failed: {:#}", e);
                log::logger().flush();
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    let mut config = match &options.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Override config with CLI options if provided
    if let Some(input_path) = options.input_path {
        config.input_path = input_path;
    }
    if let Some(output) = options.output {
        config.output_path = Some(output);
    }
    if let Some(concurrency) = options.concurrency {
        config.translation.concurrent_requests = concurrency;
    }
    if let Some(timeout) = options.timeout {
        config.translation.timeout_secs = timeout;
    }
    if let Some(source_language) = options.source_language {
        config.translation.source_language = source_language;
    }
    if let Some(target_language) = options.target_language {
        config.translation.target_language = target_language;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level(config.log_level.into());

    let show_progress = !options.no_progress && std::io::stderr().is_terminal();
    let controller = Controller::with_config(config)?.with_progress(show_progress);
    let summary = controller.run().await?;

    println!("Translated document saved to {}", summary.output_path.display());
    Ok(())
}

fn run_check(input_path: PathBuf) -> Result<()> {
    let document = FileManager::read_to_string(&input_path)
        .context("Cannot inspect document")?;

    let mut stdout = std::io::stdout().lock();
    let mut candidates = 0;
    for (index, unit) in split_units(&document).iter().enumerate() {
        let translate = classifier::needs_translation(unit);
        if translate {
            candidates += 1;
        }
        writeln!(
            stdout,
            "{:>6} {} {}",
            index + 1,
            if translate { "T" } else { "-" },
            unit.trim_end()
        )?;
    }
    writeln!(stdout, "{} line(s) would be translated", candidates)?;
    Ok(())
}
