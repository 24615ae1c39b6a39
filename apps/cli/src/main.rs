use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use locseed_core::config::{
    RunConfig, ServiceCredentials, DEFAULT_SOURCE_LOCALE, DEFAULT_TARGET_LOCALE,
};
use locseed_core::runner;
use locseed_core::translate::CloudTranslator;

/// Seed machine translations for localization files before human review.
#[derive(Parser)]
#[command(name = "locseed")]
#[command(about = "Batch-translates gettext catalogs and JSON locale trees", long_about = None)]
struct Cli {
    /// File to translate (.po, .pot or .json)
    input_path: PathBuf,

    /// Where to write the translated file
    output_path: PathBuf,

    /// Locale code of the input strings
    #[arg(long, default_value = DEFAULT_SOURCE_LOCALE)]
    source_locale: String,

    /// Locale code to translate into
    #[arg(long, default_value = DEFAULT_TARGET_LOCALE)]
    target_locale: String,
}

fn main() -> anyhow::Result<()> {
    // Credentials may live in a local .env file; a missing file is fine.
    let _ = dotenvy::dotenv();
    env_logger::init();

    let cli = Cli::parse();

    let credentials = ServiceCredentials::from_env()
        .context("translation service credentials are not configured")?;
    let translator = CloudTranslator::new(credentials)?;

    let config = RunConfig {
        input_path: cli.input_path,
        output_path: cli.output_path,
        source_locale: cli.source_locale,
        target_locale: cli.target_locale,
    };

    log::debug!(
        "starting run: {} -> {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let outcome = runner::run(&config, &translator)?;
    println!(
        "Translation completed. The translated file is saved as '{}'.",
        outcome.output_path.display()
    );
    Ok(())
}
