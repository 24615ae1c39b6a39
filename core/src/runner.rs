/// Run driver
///
/// Resolves the configured paths, picks the translator matching the input
/// format, and writes the output artifact only after every translation
/// call has succeeded.
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{ConfigError, RunConfig};
use crate::formats::{json, po, FileFormat, FormatError};
use crate::translate::{TranslationError, Translator};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("translation service error: {0}")]
    Translation(#[from] TranslationError),
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunOutcome {
    pub output_path: PathBuf,
    pub translated_entries: usize,
}

pub fn run(config: &RunConfig, translator: &dyn Translator) -> Result<RunOutcome, RunError> {
    // Canonicalizing also fail-fasts on a missing input file.
    let input_path = dunce::canonicalize(&config.input_path).map_err(FormatError::IoError)?;
    let output_path = std::path::absolute(&config.output_path).map_err(FormatError::IoError)?;

    log::info!(
        "translating {} from {} to {}",
        input_path.display(),
        config.source_locale,
        config.target_locale
    );

    let translated_entries = match FileFormat::from_path(&input_path) {
        FileFormat::Po => {
            let catalog = po::load_catalog(&input_path)?;
            let translated = po::translate_catalog(
                catalog,
                translator,
                &config.source_locale,
                &config.target_locale,
            )?;
            po::save_catalog(&translated, &output_path)?;
            translated.messages().count()
        }
        FileFormat::Json => {
            let mut tree = json::load_tree(&input_path)?;
            let translated = json::translate_tree(
                &mut tree,
                translator,
                &config.source_locale,
                &config.target_locale,
            )?;
            json::save_tree(&tree, &output_path)?;
            translated
        }
        FileFormat::Unknown => {
            return Err(FormatError::UnsupportedFormat(input_path.display().to_string()).into());
        }
    };

    log::info!(
        "wrote {} translated entries to {}",
        translated_entries,
        output_path.display()
    );

    Ok(RunOutcome {
        output_path,
        translated_entries,
    })
}
