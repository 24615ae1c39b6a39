/// JSON tree translation
///
/// Walks the parsed tree and replaces every string leaf with its
/// translation, in place. Structure is never touched: key order, array
/// lengths and non-string scalars all survive the walk unchanged.
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use super::FormatError;
use crate::translate::{TranslationError, Translator};

pub fn load_tree(path: &Path) -> Result<Value, FormatError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| FormatError::ParseError(format!("JSON parse error: {}", e)))
}

/// Serialize with four-space indentation. Non-ASCII characters are written
/// literally, not escaped.
pub fn save_tree(tree: &Value, path: &Path) -> Result<(), FormatError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    tree.serialize(&mut serializer)
        .map_err(|e| FormatError::SerializationError(format!("JSON serialize error: {}", e)))?;
    fs::write(path, buffer)?;
    Ok(())
}

/// Replace every string scalar in `tree` with its translation, returning
/// the number of strings translated.
///
/// Every string leaf goes to the service on every run, values that already
/// look translated included; repeated runs can therefore drift.
pub fn translate_tree(
    tree: &mut Value,
    translator: &dyn Translator,
    source_locale: &str,
    target_locale: &str,
) -> Result<usize, TranslationError> {
    match tree {
        Value::String(text) => {
            let translated = translator.translate(text, source_locale, target_locale)?;
            *text = translated;
            Ok(1)
        }
        Value::Object(map) => {
            let mut translated = 0;
            for (_key, value) in map.iter_mut() {
                translated += translate_tree(value, translator, source_locale, target_locale)?;
            }
            Ok(translated)
        }
        Value::Array(items) => {
            let mut translated = 0;
            for value in items.iter_mut() {
                translated += translate_tree(value, translator, source_locale, target_locale)?;
            }
            Ok(translated)
        }
        _ => Ok(0),
    }
}
