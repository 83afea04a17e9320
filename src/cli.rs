//! ringfifo command line
//!
//! Replays the demonstration scenarios or runs an operation script against a
//! freshly built buffer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::num::NonZeroUsize;

use crate::buffer::{build, Variant};
use crate::config::Config;
use crate::demo;
use crate::errors::RingError;
use crate::observability::telemetry::{init_tracing_verbose, init_tracing_with_filter};
use crate::script::{execute, parse_ops};

#[derive(Parser, Debug)]
#[command(name = "ringfifo")]
#[command(about = "Fixed-capacity overwrite-on-full ring buffers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Verbose mode (debug-level logging on stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Output format for script results
    #[arg(long, value_enum, default_value = "text", global = true)]
    output_format: OutputFormat,
}

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Which variants the demo runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoVariant {
    Contiguous,
    Linked,
    #[default]
    Both,
}

impl DemoVariant {
    fn variants(self) -> Vec<Variant> {
        match self {
            DemoVariant::Contiguous => vec![Variant::Contiguous],
            DemoVariant::Linked => vec![Variant::Linked],
            DemoVariant::Both => vec![Variant::Contiguous, Variant::Linked],
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in demonstration scenarios
    #[command(alias = "d")]
    Demo {
        #[arg(long, value_enum, default_value = "both")]
        variant: DemoVariant,
    },

    /// Apply operations (add:N, remove, pop, peek, get:N, len, clear) in order
    #[command(alias = "r")]
    Run {
        /// Buffer variant (defaults to config)
        #[arg(long, value_enum)]
        variant: Option<Variant>,

        /// Buffer capacity (defaults to config)
        #[arg(short = 'n', long)]
        capacity: Option<NonZeroUsize>,

        /// Fail with a buffer error exit code if any operation failed
        #[arg(long)]
        strict: bool,

        /// Operations to apply
        #[arg(required = true, value_name = "OP")]
        ops: Vec<String>,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

/// Parse the process arguments and run.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    execute_cli(cli, &mut stdout.lock())
}

/// Run with explicit arguments, writing results to `out`.
pub fn run_from<I, T>(args: I, out: &mut impl Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    execute_cli(cli, out)
}

fn execute_cli(cli: Cli, out: &mut impl Write) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    if cli.verbose {
        init_tracing_verbose(config.logging.format);
    } else {
        init_tracing_with_filter(&config.logging.level, config.logging.format);
    }

    match cli.command {
        Commands::Demo { variant } => {
            for variant in variant.variants() {
                for line in demo::run_scenarios(variant) {
                    writeln!(out, "{}", line)?;
                }
            }
        }
        Commands::Run {
            variant,
            capacity,
            strict,
            ops,
        } => {
            if let Some(variant) = variant {
                config.buffer.variant = variant;
            }
            if let Some(capacity) = capacity {
                config.buffer.capacity = capacity;
            }
            config.validate()?;

            let ops = parse_ops(&ops)?;
            let mut ring = build::<i64>(config.buffer.variant, config.buffer.capacity);
            let steps = execute(ring.as_mut(), &ops);

            for step in &steps {
                match cli.output_format {
                    OutputFormat::Text => writeln!(out, "{}", step)?,
                    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(step)?)?,
                }
            }

            if strict {
                if let Some(error) = steps.iter().find_map(|s| s.outcome.error()) {
                    return Err(RingError::Buffer(error).into());
                }
            }
        }
        Commands::ShowConfig => {
            write!(out, "{}", config.to_toml()?)?;
        }
    }

    Ok(())
}
