use alcometer::domain::ports::ConfigProvider;
use alcometer::utils::{logger, validation::Validate};
use alcometer::{run_batch, TomlConfig};
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter};

#[derive(Parser)]
#[command(name = "alcometer-batch")]
#[command(about = "Estimate BAC for every row of a weight,bottles,hours,sex CSV file")]
struct Args {
    /// Input CSV file
    #[arg(short, long)]
    input: String,

    /// Output CSV file, stdout when omitted
    #[arg(short, long)]
    output: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log as JSON lines instead of compact text
    #[arg(long)]
    log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting batch estimation for {}", args.input);

    let config = match &args.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            config.validate()?;
            config
        }
        None => TomlConfig::default(),
    };

    let reader = File::open(&args.input)
        .map(BufReader::new)
        .with_context(|| format!("Failed to open input '{}'", args.input))?;

    let summary = match &args.output {
        Some(path) => {
            let writer = File::create(path)
                .map(BufWriter::new)
                .with_context(|| format!("Failed to create output '{}'", path))?;
            run_batch(reader, writer, &config.palette(), config.default_sex())?
        }
        None => run_batch(
            reader,
            std::io::stdout().lock(),
            &config.palette(),
            config.default_sex(),
        )?,
    };

    if summary.failed > 0 {
        tracing::warn!("⚠️ {} of {} rows could not be estimated", summary.failed, summary.total);
    } else {
        tracing::info!("✅ All {} rows estimated", summary.total);
    }

    Ok(())
}
