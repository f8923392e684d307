use std::collections::HashMap;
use std::path::Path;

/// Key-value pairs read from an env-style file (`KEY=value` lines).
///
/// The file is an optional secondary source for credentials: the process
/// environment always wins, and a missing or unreadable file simply
/// yields an empty set instead of an error so that the default `.env`
/// path works in checkouts that never created one.
#[derive(Debug, Default)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Reads an env file from disk. A missing or unreadable file yields
    /// an empty `EnvFile`.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parses env-file content. Blank lines and `#` comments are
    /// skipped; values may be wrapped in single or double quotes.
    pub fn parse(content: &str) -> Self {
        let mut values = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim().trim_start_matches("export ").trim();
            if key.is_empty() {
                continue;
            }
            let value = strip_quotes(value.trim());
            values.insert(key.to_string(), value.to_string());
        }
        Self { values }
    }

    /// Looks up a key parsed from the file.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

fn strip_quotes(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}
