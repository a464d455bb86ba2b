use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cardposter::{registry, render, render_all, validate_str, Card, CardType, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "cardposter", version, about = "Validate and lay out information cards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a card JSON file against the schema
    Validate { file: PathBuf },
    /// Print the view description for one item (or all of them)
    Render {
        file: PathBuf,
        #[arg(long, default_value = cardposter::DEFAULT_FORMAT)]
        format: String,
        #[arg(long, default_value_t = 0)]
        index: usize,
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// List the poster template catalog
    Formats,
    /// Ask the configured model for a card
    Generate {
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        timeout_ms: Option<u64>,
        #[arg(long, env = "CARDPOSTER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        /// Card type to request (e.g. "steps")
        #[arg(long = "type")]
        card_type: Option<String>,
    },
}

fn read_card(path: &Path) -> anyhow::Result<Card> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(validate_str(&text)?)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Validate { file } => {
            let card = read_card(&file)?;
            println!("ok: {} ({} items)", card.card_type(), card.len());
        }
        Commands::Render {
            file,
            format,
            index,
            all,
        } => {
            let card = read_card(&file)?;
            let json = if all {
                serde_json::to_string_pretty(&render_all(&card, &format)?)?
            } else {
                serde_json::to_string_pretty(&render(&card, index, &format)?)?
            };
            println!("{}", json);
        }
        Commands::Formats => {
            for style in registry::catalog() {
                println!("{:<10} {:<14} {}", style.id, style.name, style.background);
            }
        }
        Commands::Generate {
            prompt,
            endpoint,
            model,
            timeout_ms,
            api_key,
            card_type,
        } => {
            let defaults = GeneratorConfig::default();
            let config = GeneratorConfig {
                endpoint: endpoint.unwrap_or(defaults.endpoint),
                model: model.unwrap_or(defaults.model),
                timeout_ms: timeout_ms.unwrap_or(defaults.timeout_ms),
                api_key: api_key.unwrap_or_default(),
                ..defaults
            };
            let card_type = card_type.map(|tag| tag.parse::<CardType>()).transpose()?;
            let card = generate(config, card_type, &prompt)?;
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
    }
    Ok(())
}

#[cfg(feature = "http")]
fn generate(config: GeneratorConfig, card_type: Option<CardType>, prompt: &str) -> anyhow::Result<Card> {
    let mut generator = cardposter::HttpGenerator::new(config)?;
    if let Some(card_type) = card_type {
        generator = generator.with_card_type(card_type);
    }
    Ok(cardposter::generate_card(&generator, prompt)?)
}

#[cfg(not(feature = "http"))]
fn generate(_config: GeneratorConfig, _card_type: Option<CardType>, _prompt: &str) -> anyhow::Result<Card> {
    anyhow::bail!("cardposter was built without the `http` feature")
}

fn main() -> ExitCode {
    // Keep logging setup in the binary so the library stays logger-agnostic.
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
