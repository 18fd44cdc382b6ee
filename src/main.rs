//! msmetrics: cohesion and granularity metrics for microservice decompositions
//!
//! Computes LCOM, DGS, FGS and SGM for every service of every candidate
//! decomposition scheme and exports detailed and summary tables.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use msmetrics::{
    cli,
    config::{AppConfig, CONFIG_FILE_NAMES, DEFAULT_CONFIG_FILE_NAME},
    engine::AveragingPolicy,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInputs:",
        "\n  entities (JSON), operations (YAML), schemes directory (JSON per scheme)",
        "\n\nOutput Formats:",
        "\n  csv, json, markdown, table",
        "\n\nMetrics:",
        "\n  LCOM, DGS, FGS, SGM per service; ALCOM, ASGM, NOO(max) per scheme"
    )
}

#[derive(Parser)]
#[command(name = "msmetrics")]
#[command(version, long_version = build_long_version())]
#[command(
    about = "Cohesion and granularity metrics for candidate microservice decompositions",
    long_about = None
)]
#[command(after_help = "EXIT CODES:
    0  Metrics calculated and exported
    1  Nothing to export / validation warnings with --fail-on-warning
    3  Error occurred

EXAMPLES:
    # Run with msmetrics.yaml from the current directory
    msmetrics calculate

    # Override inputs and write JSON reports
    msmetrics calculate --schemes-dir schemes -O results/metrics.json

    # Average only over services that have use cases
    msmetrics calculate --averaging processed -o table

    # Check inputs without computing metrics
    msmetrics validate --fail-on-warning")]
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
    #[arg(long, global = true, env = "MSMETRICS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Input paths shared by `calculate` and `validate`
#[derive(Args)]
struct InputArgs {
    /// Entity catalogue (JSON); overrides `entities_file`
    #[arg(long)]
    entities: Option<PathBuf>,

    /// Operations catalogue (YAML); overrides `operations_file`
    #[arg(long)]
    operations: Option<PathBuf>,

    /// Directory of scheme files (JSON); overrides `schemes_dir`
    #[arg(long)]
    schemes_dir: Option<PathBuf>,
}

/// Arguments for the `calculate` subcommand
#[derive(Parser)]
struct CalculateArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Output format (auto: from the file extension, else table on a TTY, csv when piped)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Base output path; `_detailed` and `_summary` are appended to the stem
    /// (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Denominator for ALCOM/ASGM
    #[arg(long, value_enum)]
    averaging: Option<AveragingPolicy>,

    /// Process schemes in parallel
    #[arg(long)]
    parallel: bool,
}

/// Arguments for the `validate` subcommand
#[derive(Parser)]
struct ValidateArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Exit with code 1 if any dangling reference is found
    #[arg(long)]
    fail_on_warning: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate metrics for every scheme and export the reports
    Calculate(CalculateArgs),

    /// Check the configuration and input files without calculating
    Validate(ValidateArgs),

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
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example msmetrics.yaml in the current directory
    Init,
}

impl InputArgs {
    fn overrides(self) -> msmetrics::AppConfigBuilder {
        AppConfig::builder()
            .entities_file(self.entities)
            .operations_file(self.operations)
            .schemes_dir(self.schemes_dir)
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; reports go to stdout, logs to stderr
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            exit_codes::ERROR
        }
    };

    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}

/// Dispatch to command handlers
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Calculate(args) => {
            let mut overrides = args
                .inputs
                .overrides()
                .output_format(args.output)
                .output_file(args.output_file)
                .parallel(args.parallel)
                .no_color(cli.no_color);
            if let Some(averaging) = args.averaging {
                overrides = overrides.averaging(averaging);
            }
            cli::run_calculate(cli.config.as_deref(), &overrides.build())
        }

        Commands::Validate(args) => {
            let overrides = args.inputs.overrides().build();
            cli::run_validate(cli.config.as_deref(), &overrides, args.fail_on_warning)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "msmetrics", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = msmetrics::config::generate_json_schema()
                .context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    msmetrics::config::load_config(cli.config.as_deref())?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in msmetrics::config::file::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match msmetrics::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(DEFAULT_CONFIG_FILE_NAME);
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = msmetrics::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
