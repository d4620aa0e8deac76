use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size accepted for package.json / package-lock.json (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a file after checking that it is a regular file (not a symlink or
/// directory) no larger than [`MAX_FILE_SIZE`].
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Name used in error messages (e.g. "package-lock.json")
pub fn safe_read_to_string(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Validates a tracker base URL: absolute `http://` or `https://`, without
/// whitespace or control characters that could alter the request line
pub fn validate_tracker_url(tracker_url: &str) -> Result<()> {
    if tracker_url.is_empty() {
        anyhow::bail!("Tracker URL must not be empty");
    }

    if tracker_url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        anyhow::bail!("Security: tracker URL '{}' contains whitespace or control characters", tracker_url.escape_default());
    }

    if !(tracker_url.starts_with("http://") || tracker_url.starts_with("https://")) {
        anyhow::bail!("Tracker URL '{}' must start with http:// or https://", tracker_url);
    }

    Ok(())
}
