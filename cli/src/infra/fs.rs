//! Filesystem infrastructure: implements `LocalFs` and the atomic write
//! shared by every store.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Owner read/write only.
pub const PRIVATE_MODE: u32 = 0o600;
/// Owner read/write, world readable.
pub const PUBLIC_MODE: u32 = 0o644;

/// Production filesystem implementation of `LocalFs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl crate::application::ports::LocalFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("creating directory {}", path.display()))
        })
        .await
        .context("spawn_blocking for create_dir_all")?
    }

    async fn write_atomic(&self, path: &Path, content: String) -> Result<()> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || write_atomic(&path, content.as_bytes(), PUBLIC_MODE))
            .await
            .context("spawn_blocking for write_atomic")?
    }
}

/// Replace `path` with `content` via a temp file in the same directory and a
/// rename, so readers never observe a partial file.
///
/// `mode` is applied to the temp file before the rename on unix.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written or renamed into place.
pub fn write_atomic(path: &Path, content: &[u8], mode: u32) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("creating directory {}", parent.display()))?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("creating temp file in {}", parent.display()))?;
    temp.write_all(content)
        .with_context(|| format!("writing temp file for {}", path.display()))?;
    temp.as_file()
        .sync_all()
        .with_context(|| format!("flushing temp file for {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(temp.path(), std::fs::Permissions::from_mode(mode))
            .with_context(|| format!("setting permissions on {}", temp.path().display()))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    temp.persist(path)
        .with_context(|| format!("finalizing {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
