use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;
use tracing::warn;

/// Atomically write `contents` to `path` via a sibling temporary file and a
/// rename, so a concurrent reader never observes a half-written document.
pub fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| Path::new(".").to_path_buf());
    fs::create_dir_all(&parent)?;

    let mut tmp = Builder::new()
        .prefix(".inline-icons")
        .tempfile_in(&parent)?;

    tmp.as_file_mut().write_all(contents.as_bytes())?;
    tmp.as_file_mut().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = fs::metadata(path) {
            let perm = metadata.permissions().mode();
            if let Err(err) = fs::set_permissions(tmp.path(), fs::Permissions::from_mode(perm)) {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "could not carry file mode over to rewrite"
                );
            }
        }
    }

    tmp.persist(path).map(|_| ()).map_err(|err| err.error)
}
