//! User configuration (`config.toml`).
//!
//! ```toml
//! [search]
//! on-file-error = "skip-file"   # or "abort-all" (default)
//! ```

use directories::ProjectDirs;
use serde::Deserialize;
use sheetseek_core::SearchOptions;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    search: Option<SearchOptions>,
}

pub(crate) fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "sheetseek")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load search options.
///
/// An explicit `config_file` must exist; the per-user file is optional. Problems
/// never abort the program: they are returned as warnings and defaults are used.
pub fn load_options(config_file: Option<&Path>, use_user_config: bool) -> (SearchOptions, Vec<String>) {
    let mut warnings = Vec::new();
    let path = match config_file {
        Some(p) => Some(p.to_path_buf()),
        None if use_user_config => user_config_path(),
        None => None,
    };

    let Some(path) = path else {
        return (SearchOptions::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (SearchOptions::default(), warnings);
    }

    let options = match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(parsed) => parsed.search,
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    };

    (options.unwrap_or_default(), warnings)
}
