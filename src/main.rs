use clap::Parser;
use log::info;
use quotegen::{GeneratorBuilder, PipelineError, QuoteDocument, default_file_name};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a proposal PDF from a quote JSON file.
#[derive(Parser, Debug)]
#[command(name = "quotegen", version, about)]
struct Cli {
    /// Quote document (client, proposalObject, items, issueDate) as JSON.
    input: PathBuf,

    /// Output PDF path. Defaults to Proposta_SEDA_<issue date>.pdf
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file overriding the fixed texts and colours.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Full-page background image, relative to the asset directory.
    #[arg(long)]
    background: Option<String>,

    /// Leave the pages without a background image.
    #[arg(long, conflicts_with = "background")]
    no_background: bool,

    /// Directory asset paths are resolved against.
    #[arg(long, default_value = ".")]
    assets: PathBuf,
}

fn run(cli: Cli) -> Result<PathBuf, PipelineError> {
    info!("Loading quote from {}", cli.input.display());
    let source = std::fs::read_to_string(&cli.input)?;
    let document: QuoteDocument = serde_json::from_str(&source)?;

    let mut builder = GeneratorBuilder::new().with_asset_dir(&cli.assets);
    if let Some(config) = &cli.config {
        builder = builder.with_config_file(config)?;
    }
    if let Some(background) = cli.background {
        builder = builder.with_background(background);
    }
    if cli.no_background {
        builder = builder.without_background();
    }
    let generator = builder.build()?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(default_file_name(&document)));
    generator.generate_to_file(&document, &output)?;
    Ok(output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("quotegen=info"))
        .init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("Successfully generated {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
