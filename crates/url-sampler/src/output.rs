use crate::error::{GenerateError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// One output record: the prefix directly followed by the decimal index.
pub fn format_url(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}")
}

/// Write one url per line to `path`, replacing it atomically.
///
/// Records go to a temporary file in the destination directory which is
/// renamed over `path` only once fully flushed. A failed run leaves any
/// previous file at `path` untouched.
///
/// A replaced file keeps its permissions; a new one gets the same mode a
/// plain create would (`0o666` minus the umask).
pub fn write_urls(path: &Path, prefix: &str, indexes: &[usize]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let tmp = create_temp(dir).map_err(|e| GenerateError::io(dir, e))?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| GenerateError::io(path, e))?;
    }

    let mut writer = BufWriter::new(tmp);
    for &index in indexes {
        writeln!(writer, "{}", format_url(prefix, index)).map_err(|e| GenerateError::io(path, e))?;
    }
    let tmp = writer
        .into_inner()
        .map_err(|e| GenerateError::io(path, e.into_error()))?;

    tmp.persist(path)
        .map_err(|e| GenerateError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), lines = indexes.len(), "output written");
    Ok(())
}

/// Temp files default to owner-only; request the regular create mode so the
/// umask applies as it would to the final file.
#[cfg(unix)]
fn create_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
