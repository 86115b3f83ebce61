use alcometer::core::render::{render_json, render_text};
use alcometer::domain::model::OutputFormat;
use alcometer::domain::ports::ConfigProvider;
use alcometer::utils::{logger, validation::Validate};
use alcometer::{AlcometerError, CliConfig, TerminalAlerter, TomlConfig};
use clap::Parser;

fn main() {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting alcometer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入設定檔 (若有指定)
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        let file = match TomlConfig::from_file(&path).and_then(|file| {
            file.validate()?;
            Ok(file)
        }) {
            Ok(file) => file,
            Err(e) => exit_with(&e),
        };
        config.apply_file(&file);
    }

    let mut form = config.to_form();
    let Some(result) = form.calculate(&TerminalAlerter) else {
        exit_with(&AlcometerError::MissingWeight);
    };

    let palette = config.palette();
    match config.output_format() {
        OutputFormat::Text => {
            println!(
                "{}",
                render_text(&result, form.theme, &palette, config.color_enabled())
            );
        }
        OutputFormat::Json => match render_json(&result, &palette) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with(&e),
        },
    }
}

fn exit_with(e: &AlcometerError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    if !matches!(e, AlcometerError::MissingWeight) {
        eprintln!("❌ {}", e.user_friendly_message());
    }
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
