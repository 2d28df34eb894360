use clap::Parser;
use std::path::PathBuf;
use systeme_utils::cli::{self, Command, Invocation};
use systeme_utils::core::batch::DEFAULT_BATCH_PATTERN;
use systeme_utils::core::BatchOptions;

#[derive(Parser)]
#[command(name = "systeme-utils")]
#[command(about = "Provide some utils for SystemeHD PLC.")]
#[command(long_about = "systeme-utils - SystemeHD config converter

COMMANDS:
  json      - Converts SystemeHD config *.xls file to *.json.
              Uses the file provided by --filename option
  new-json  - Converts a new-layout SystemeHD config *.xls file to *.json.
              Uses the file provided by --filename option
  platform  - Converts SystemeHD config *.xls file to Platform HD config *.xlsx.
              Uses the file provided by --filename option, or every *.xls
              file below the --batch directory
  show      - Shows config *.json. Uses the file provided by --filename option
              (not implemented, does nothing)

EXAMPLES:
  systeme-utils -c json -f /data/plant.xls          # → /data/plant.json
  systeme-utils -c platform -f /data/plant.xls      # → /data/plant_plat.xlsx
  systeme-utils -c platform -b /data/exports        # every *.xls below /data/exports

LOGGING:
  Set RUST_LOG (e.g. RUST_LOG=systeme_utils=debug) to see skipped rows and
  per-file steps on stderr.")]
#[command(version)]
struct Cli {
    /// Operation to run
    #[arg(short, long, value_enum)]
    command: Command,

    /// Required file full name
    #[arg(short, long, env = "SYSTEME_UTILS_FILENAME")]
    filename: Option<PathBuf>,

    /// Path to directory. Finds all *.xls files in this dir and sub dirs, and tries to convert them (platform only)
    #[arg(short, long, env = "SYSTEME_UTILS_BATCH")]
    batch: Option<PathBuf>,

    /// File name pattern used by --batch
    #[arg(long, default_value = DEFAULT_BATCH_PATTERN, env = "SYSTEME_UTILS_PATTERN")]
    pattern: String,

    /// Show verbose conversion steps
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "systeme_utils=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let batch = cli
        .batch
        .map(|root| BatchOptions::new(root).with_pattern(cli.pattern));

    cli::run(Invocation {
        command: cli.command,
        filename: cli.filename,
        batch,
        verbose: cli.verbose,
    })?;

    Ok(())
}
