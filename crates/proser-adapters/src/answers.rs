//! Answers files: pre-filled responses to project type questions.
//!
//! A flat TOML table (or JSON object for `.json` files) of question key to
//! value. Strings are taken as-is, booleans become `yes`/`no` and integers
//! are stringified.

use std::path::Path;

use proser_core::{
    application::Storage,
    domain::Answers,
    error::{ProserError, ProserResult},
};
use tracing::debug;

/// Read and parse an answers file through `storage`.
pub fn load_answers(storage: &dyn Storage, path: &Path) -> ProserResult<Answers> {
    let bytes = storage.read_file(path)?;
    let text = String::from_utf8(bytes).map_err(|_| {
        ProserError::configuration(format!("Answers file {} is not valid UTF-8", path.display()))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let answers = if is_json {
        parse_json(&text)
    } else {
        parse_toml(&text)
    }
    .map_err(|reason| {
        ProserError::configuration(format!("Invalid answers file {}: {}", path.display(), reason))
    })?;

    debug!(path = %path.display(), count = answers.len(), "Loaded answers");
    Ok(answers)
}

/// Parse a TOML answers document.
pub fn parse_toml(text: &str) -> Result<Answers, String> {
    let table: toml::Table = toml::from_str(text).map_err(|e| e.to_string())?;
    table
        .into_iter()
        .map(|(key, value)| {
            let answer = match value {
                toml::Value::String(s) => s,
                toml::Value::Boolean(b) => yes_no(b),
                toml::Value::Integer(i) => i.to_string(),
                other => return Err(unsupported(&key, other.type_str())),
            };
            Ok((key, answer))
        })
        .collect()
}

/// Parse a JSON answers document.
pub fn parse_json(text: &str) -> Result<Answers, String> {
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(text).map_err(|e| e.to_string())?;
    object
        .into_iter()
        .map(|(key, value)| {
            let answer = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => yes_no(b),
                serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
                _ => return Err(unsupported(&key, "non-scalar")),
            };
            Ok((key, answer))
        })
        .collect()
}

fn yes_no(b: bool) -> String {
    String::from(if b { "yes" } else { "no" })
}

fn unsupported(key: &str, kind: &str) -> String {
    format!("`{}` has unsupported {} value; use a string, boolean or integer", key, kind)
}
