//! ai-visibility: AI platform visibility analysis client
//!
//! Submits a company name or URL to an analysis service and renders the
//! scores as a terminal dashboard or a report.

use ai_visibility::{
    cli::{self, LogTarget},
    config::{self, ApiOverrides, ConfigPreset, Validatable},
    model::ResultSchema,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "ai-visibility")]
#[command(version)]
#[command(about = "AI platform visibility analysis client", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Result obtained (and at or above --min-score)
    1  Headline score below --min-score
    2  Analysis request failed
    3  Error occurred

EXAMPLES:
    # Interactive dashboard
    ai-visibility dashboard

    # One-shot analysis as a Markdown report
    ai-visibility analyze https://example.com -o markdown

    # Against the company dashboard endpoint
    ai-visibility --preset dashboard analyze \"Acme Corp\"

    # Re-render a saved response offline
    ai-visibility render response.json -o table")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the dashboard is otherwise silent)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    api: ApiArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Analysis service overrides (flags win over environment, which wins over
/// the config file)
#[derive(Parser)]
struct ApiArgs {
    /// Named service preset (dashboard, url-input, url-analysis)
    #[arg(long, global = true, env = "AI_VISIBILITY_PRESET")]
    preset: Option<ConfigPreset>,

    /// Base URL of the analysis service
    #[arg(long, global = true, env = "AI_VISIBILITY_BASE_URL")]
    base_url: Option<String>,

    /// Request path on the analysis service
    #[arg(long, global = true, env = "AI_VISIBILITY_PATH")]
    path: Option<String>,

    /// JSON field that carries the query in the request body
    #[arg(long, global = true, env = "AI_VISIBILITY_QUERY_FIELD")]
    query_field: Option<String>,

    /// Expected result shape (auto, grid, url-analysis)
    #[arg(long, global = true, env = "AI_VISIBILITY_SCHEMA")]
    schema: Option<ResultSchema>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "AI_VISIBILITY_TIMEOUT")]
    timeout: Option<u64>,

    /// Do not unwrap a `{"data": ...}` response envelope
    #[arg(long, global = true)]
    no_envelope: bool,
}

impl ApiArgs {
    fn overrides(&self) -> ApiOverrides {
        ApiOverrides {
            preset: self.preset,
            base_url: self.base_url.clone(),
            path: self.path.clone(),
            query_field: self.query_field.clone(),
            schema: self.schema,
            timeout_secs: self.timeout,
            no_envelope: self.no_envelope,
        }
    }
}

/// Report output options shared by `analyze` and `render`
#[derive(Parser)]
struct OutputArgs {
    /// Output format (auto detects TTY: tui if interactive, summary otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when the headline score is below this value
    #[arg(long)]
    min_score: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one company name or URL
    Analyze {
        /// Company name or URL to analyze
        query: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a saved service response through the report pipeline
    Render {
        /// JSON file holding a service response
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Open the interactive dashboard
    Dashboard {
        /// Query to analyze on startup
        query: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file + flags)
    Show,
    /// Show config file search paths and which file is active
    Path,
    /// Create an example `.ai-visibility.yaml` in the current directory
    Init,
}

/// Whether this invocation ends in the interactive dashboard.
///
/// Runs before logging is set up, so config warnings raised here are not
/// seen; the config is loaded again once a subscriber exists.
fn runs_dashboard(cli: &Cli) -> bool {
    match &cli.command {
        Commands::Dashboard { .. } => true,
        Commands::Analyze { output, .. } | Commands::Render { output, .. } => {
            cli::resolve_format(&effective_config(cli, Some(output))) == ReportFormat::Tui
        }
        _ => false,
    }
}

/// Initialize logging.
///
/// Logs go to stderr, except when the dashboard owns the terminal: it logs
/// only to `--log-file` and is silent otherwise.
fn init_logging(cli: &Cli, target: LogTarget) -> Result<()> {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()));

    match target {
        LogTarget::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .init();
        }
        LogTarget::Silent => {}
    }
    Ok(())
}

/// Load the config file, then apply flag/env overrides, then validate.
fn effective_config(cli: &Cli, output: Option<&OutputArgs>) -> config::AppConfig {
    let (mut config, loaded_from) = config::load_or_default(cli.config.as_deref());
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    config.apply_overrides(&cli.api.overrides());
    if cli.no_color {
        config.output.no_color = true;
    }
    if let Some(output) = output {
        if let Some(format) = output.output {
            config.output.format = format;
        }
        if output.output_file.is_some() {
            config.output.file.clone_from(&output.output_file);
        }
    }

    for error in config.validate() {
        tracing::warn!("Config: {error}");
    }
    config
}

fn exit_with(code: i32) -> Result<()> {
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let target = cli::log_target(runs_dashboard(&cli), cli.log_file.as_deref());
    init_logging(&cli, target)?;

    match &cli.command {
        Commands::Analyze { query, output } => {
            let config = effective_config(&cli, Some(output));
            exit_with(cli::run_analyze(&config, query, output.min_score, cli.quiet)?)
        }

        Commands::Render { file, output } => {
            let config = effective_config(&cli, Some(output));
            exit_with(cli::run_render(&config, file, output.min_score, cli.quiet)?)
        }

        Commands::Dashboard { query } => {
            let config = effective_config(&cli, None);
            exit_with(cli::run_dashboard(&config, query.clone())?)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "ai-visibility", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = effective_config(&cli, None);
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir().map(|p| p.join("ai-visibility").display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".ai-visibility.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
