//! Filesystem utilities for atomic installs.

use std::fs;
use std::io;
use std::path::Path;

/// Writes `bytes` to `destination` through a sibling temp file and a
/// rename, so the destination is either the old document or the new
/// one, never a torn write.
///
/// On some platforms (notably Windows), `fs::rename` fails if the
/// destination already exists; that case is handled by removing the
/// destination and retrying. The temp file is cleaned up on failure.
///
/// # Errors
///
/// Returns an error if the temp write fails, or if the rename fails
/// even after the fallback attempt.
pub fn write_atomic(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    let file_name = destination.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "destination has no file name",
        )
    })?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = destination.with_file_name(temp_name);

    fs::write(&temp_path, bytes)?;

    if let Err(initial_err) = fs::rename(&temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
        let _ = fs::remove_file(destination);
        fs::rename(&temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(&temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic install failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
