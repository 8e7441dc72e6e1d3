use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use textconv::{utils, Config, Converter};

#[derive(Parser)]
#[command(name = "textconv")]
#[command(about = "Convert a document file to plain text in place")]
#[command(version)]
struct Cli {
    /// File to convert
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Configuration file (overrides default locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip conversion entirely and report success
    #[arg(long)]
    passthrough: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textconv=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load().unwrap_or_default(),
    };
    if cli.passthrough {
        config.conversion.enabled = false;
    }

    let final_path = if config.conversion.enabled && !utils::has_txt_extension(&cli.file) {
        utils::append_txt_extension(&cli.file)
    } else {
        cli.file.clone()
    };

    let converter = Converter::new(config);
    let success = converter.convert(&cli.file)?;

    println!("{}", final_path.display());

    if !success {
        eprintln!(
            "conversion failed; {} holds the error description",
            final_path.display()
        );
        std::process::exit(1);
    }

    Ok(())
}
