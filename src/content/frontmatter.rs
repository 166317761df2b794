//! Front matter extraction for content entries.
//!
//! Supports YAML-like (`---`) and TOML (`+++`) blocks. Only flat
//! `key: value` pairs are read; nested YAML structures and TOML tables are
//! skipped since feed entries need scalar fields only.

use rustc_hash::FxHashMap;
use toml::value::Datetime;

/// Flat front matter fields, keys lowercased.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    fields: FxHashMap<String, String>,
}

impl FrontMatter {
    /// Extract front matter from the start of `content`.
    ///
    /// Returns `Ok(None)` when the document has no front matter block and
    /// `Err` with a reason when a TOML block fails to parse.
    pub fn extract(content: &str) -> Result<Option<Self>, String> {
        match detect_frontmatter(content) {
            Some((fm, true)) => parse_toml(fm).map(Some),
            Some((fm, false)) => Ok(Some(parse_yaml_like(fm))),
            None => Ok(None),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// First present key among `keys`.
    pub fn get_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }
}

/// Returns `(frontmatter, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if trimmed.starts_with(fence)
            && let Some(end) = trimmed[3..].find(&format!("\n{fence}"))
        {
            return Some((trimmed[3..3 + end].trim(), is_toml));
        }
    }
    None
}

fn parse_yaml_like(content: &str) -> FrontMatter {
    let mut fields = FxHashMap::default();

    for line in content.lines() {
        // Indented lines belong to nested structures
        if line.starts_with([' ', '\t']) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let value = strip_comment(value.trim());
            if value.is_empty() {
                continue;
            }
            fields.insert(key.trim().to_lowercase(), unquote(value));
        }
    }

    FrontMatter { fields }
}

fn parse_toml(content: &str) -> Result<FrontMatter, String> {
    let table: toml::Table =
        toml::from_str(content).map_err(|e| format!("invalid TOML front matter: {e}"))?;

    let fields = table
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Datetime(dt) => datetime_to_string(&dt),
                toml::Value::Array(_) | toml::Value::Table(_) => return None,
            };
            Some((key.to_lowercase(), value))
        })
        .collect();

    Ok(FrontMatter { fields })
}

/// Local datetimes are read as UTC.
fn datetime_to_string(dt: &Datetime) -> String {
    if dt.time.is_some() && dt.offset.is_none() {
        format!("{dt}Z")
    } else {
        dt.to_string()
    }
}

/// Drop a trailing ` # comment` from an unquoted value.
fn strip_comment(value: &str) -> &str {
    if value.starts_with(['"', '\'']) {
        return value;
    }
    value.split_once(" #").map_or(value, |(v, _)| v.trim_end())
}

fn unquote(value: &str) -> String {
    if value.len() >= 2 {
        if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
            return inner.replace("\\\"", "\"").replace("\\\\", "\\");
        }
        if let Some(inner) = value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')) {
            return inner.replace("''", "'");
        }
    }
    value.to_string()
}
