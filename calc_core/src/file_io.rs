//! # File I/O Module
//!
//! Settings file operations:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//! - **Optional files**: A missing settings file simply means defaults
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::file_io::{load_settings_or_default, save_settings};
//! use std::path::Path;
//!
//! let path = Path::new("concrete.toml");
//! let mut settings = load_settings_or_default(path)?;
//! settings.appearance.dark_mode = false;
//! save_settings(&settings, path)?;
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::errors::{CalcError, CalcResult};
use crate::settings::{Settings, SCHEMA_VERSION};

/// Save settings to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize settings to TOML
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp over the target
pub fn save_settings(settings: &Settings, path: &Path) -> CalcResult<()> {
    let text = toml::to_string_pretty(settings).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(text.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Load settings from a file.
///
/// # Returns
///
/// * `Ok(Settings)` - Successfully loaded settings
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid TOML
/// * `Err(CalcError::FileError)` - I/O error (including a missing file)
pub fn load_settings(path: &Path) -> CalcResult<Settings> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: Settings = toml::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid TOML in {}: {}", path.display(), e),
    })?;

    validate_version(&settings.version)?;

    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// Load settings, falling back to defaults when the file does not exist.
///
/// A file that exists but cannot be read or parsed is still an error.
pub fn load_settings_or_default(path: &Path) -> CalcResult<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    load_settings(path)
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    path.with_extension(extension)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor means a file we don't understand
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}
