//! Environment-file codec.
//!
//! Parsing is tolerant: blank lines, `#` comments and lines without `=` are
//! skipped. Rendering is template-driven: it always emits the full key schema
//! in a fixed order, fills absent keys with their defaults and drops keys
//! outside the schema.

use indexmap::IndexMap;
use postiz_common::env_schema::{JWT_SECRET, Quoting, SECRET_ALPHABET, SECRET_LEN, STATIC_KEYS};
use postiz_common::providers::PROVIDERS;
use rand::Rng;

/// Key/value pairs in file order. Later duplicates overwrite earlier values.
pub type EnvMap = IndexMap<String, String>;

/// Parse `.env` content.
#[must_use]
pub fn parse(content: &str) -> EnvMap {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut vars = EnvMap::new();
    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    vars
}

/// Strip one layer of matching quotes when they bound the whole value
/// (optionally followed by an inline comment). Unquoted values lose a
/// trailing ` # comment`.
fn unquote(value: &str) -> &str {
    let Some(quote) = value.chars().next().filter(|c| matches!(c, '"' | '\'')) else {
        return strip_inline_comment(value);
    };
    let body = &value[1..];
    if let Some(end) = body.rfind(quote) {
        let rest = body[end + 1..].trim_start();
        if rest.is_empty() || rest.starts_with('#') {
            return &body[..end];
        }
    }
    value
}

fn strip_inline_comment(value: &str) -> &str {
    if value.starts_with('#') {
        return "";
    }
    value
        .match_indices('#')
        .find(|(i, _)| value[..*i].ends_with(char::is_whitespace))
        .map_or(value, |(i, _)| value[..i].trim_end())
}

/// Render the full `.env` document.
///
/// A fresh secret is generated only when `JWT_SECRET` is absent; an existing
/// value is always carried forward unchanged.
#[must_use]
pub fn render(vars: &EnvMap) -> String {
    let value = |key: &str, default: &str| -> String {
        vars.get(key).cloned().unwrap_or_else(|| default.to_string())
    };

    let secret = vars.get(JWT_SECRET).cloned().unwrap_or_else(generate_secret);

    let mut lines = vec![
        "# Changing Settings".to_string(),
        format!("{JWT_SECRET}=\"{secret}\""),
        String::new(),
        "# Social Media Settings".to_string(),
    ];

    for provider in &PROVIDERS {
        for key in [provider.client_id_key, provider.client_secret_key] {
            lines.push(format!("{key}=\"{}\"", value(key, "")));
        }
    }
    for extra in PROVIDERS.iter().filter_map(|p| p.extra) {
        lines.push(format!("{}=\"{}\"", extra.key, value(extra.key, extra.default)));
    }

    lines.push(String::new());
    lines.push(String::new());
    lines.push("# Static Settings".to_string());

    for entry in &STATIC_KEYS {
        let v = value(entry.key, entry.default);
        let mut line = match entry.quoting {
            Quoting::Double => format!("{}=\"{v}\"", entry.key),
            Quoting::Bare => format!("{}={v}", entry.key),
        };
        if let Some(comment) = entry.comment {
            line.push_str(" # ");
            line.push_str(comment);
        }
        lines.push(line);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Generate a signing secret drawn uniformly from [`SECRET_ALPHABET`].
#[must_use]
pub fn generate_secret() -> String {
    let mut rng = rand::rng();
    (0..SECRET_LEN)
        .map(|_| char::from(SECRET_ALPHABET[rng.random_range(0..SECRET_ALPHABET.len())]))
        .collect()
}

/// Mask a credential for display, keeping the first four characters.
#[must_use]
pub fn mask(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let prefix: String = value.chars().take(4).collect();
    format!("{prefix}…")
}
