use clap::Parser;
use earnings_signal::cli::{Cli, Commands};
use earnings_signal::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    earnings_signal::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Analyze(args) => {
            tracing::info!("Starting transcript analysis");
            args.execute(&config).await?;
        }
        Commands::Market(args) => {
            args.execute().await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Telemetry: level={}, format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
            match &config.engine.lexicon_path {
                Some(path) => println!("  Lexicon: {}", path.display()),
                None => println!("  Lexicon: standard"),
            }
            println!("  Context window: {} chars", config.engine.context_chars);
        }
    }

    Ok(())
}
