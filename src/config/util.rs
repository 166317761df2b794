//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// Search for config file by walking up from current directory.
///
/// Returns the absolute path to the config file if found.
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Record an error unless `url` is an absolute http(s) URL with a host.
pub fn validate_http_url(field: FieldPath, url: &str, diag: &mut ConfigDiagnostics) {
    const HINT: &str = "use format like https://example.com";

    match url::Url::parse(url) {
        Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
            diag.error_with_hint(
                field,
                format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ),
                HINT,
            );
        }
        Ok(parsed) if parsed.host_str().is_none() => {
            diag.error_with_hint(field, "URL must have a valid host", HINT);
        }
        Ok(_) => {}
        Err(e) => {
            diag.error_with_hint(field, format!("invalid URL: {e}"), HINT);
        }
    }
}

// ============================================================================
// tests
// ============================================================================
