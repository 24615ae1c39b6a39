/// PO (gettext) catalog translation
///
/// Builds a fresh catalog for the target locale: header metadata is carried
/// over from the input, and only entries without an existing translation
/// are sent to the service. Entries that already carry a translation are
/// dropped from the output rather than carried through, so the result is a
/// seed catalog for review, not a merged one.
use std::path::Path;

use polib::catalog::Catalog;
use polib::message::Message;
use polib::po_file;

use super::FormatError;
use crate::translate::{TranslationError, Translator};

pub fn load_catalog(path: &Path) -> Result<Catalog, FormatError> {
    po_file::parse(path).map_err(|e| FormatError::ParseError(format!("PO parse error: {}", e)))
}

pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<(), FormatError> {
    po_file::write(catalog, path)
        .map_err(|e| FormatError::SerializationError(format!("PO write error: {}", e)))
}

/// Translate every untranslated entry of `catalog`, producing the catalog
/// for the target locale.
///
/// Entry order follows the input. The output catalog is built entirely in
/// memory; nothing is written here, so a failed remote call leaves no
/// artifact behind.
pub fn translate_catalog(
    catalog: Catalog,
    translator: &dyn Translator,
    source_locale: &str,
    target_locale: &str,
) -> Result<Catalog, TranslationError> {
    let mut seeded = Vec::new();
    for message in catalog.messages() {
        if message.msgid().is_empty() {
            continue;
        }
        // Never overwrite an existing human or machine translation.
        if !message.msgstr().unwrap_or_default().is_empty() {
            continue;
        }

        let translated = translator.translate(message.msgid(), source_locale, target_locale)?;
        seeded.push(
            Message::build_singular()
                .with_msgid(message.msgid().to_string())
                .with_msgstr(translated)
                .done(),
        );
    }

    let mut output = Catalog::new(catalog.metadata);
    for message in seeded {
        output.append_or_update(message);
    }
    Ok(output)
}
