//! Infrastructure implementation of the `EnvStore` port.
//!
//! Reads go through `env_file::parse`, writes through `env_file::render`
//! and an atomic replace. Both run on the blocking pool.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::ports::EnvStore;
use crate::domain::env_file::{self, EnvMap};
use crate::infra::fs::{PRIVATE_MODE, write_atomic};

/// The `.env` file on local disk. Holds no cached state; every call
/// reads or rewrites the whole file.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvFileStore;

impl EnvFileStore {
    fn read_sync(path: &Path) -> Result<EnvMap> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let vars = env_file::parse(&content);
                debug!(path = %path.display(), keys = vars.len(), "read env file");
                Ok(vars)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "env file absent");
                Ok(EnvMap::new())
            }
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }
}

impl EnvStore for EnvFileStore {
    async fn read(&self, path: &Path) -> Result<EnvMap> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_sync(&path))
            .await
            .context("env file read task panicked")?
    }

    async fn write(&self, path: &Path, vars: &EnvMap) -> Result<()> {
        let content = env_file::render(vars);
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            write_atomic(&path, content.as_bytes(), PRIVATE_MODE)?;
            info!(path = %path.display(), "env file written");
            Ok::<(), anyhow::Error>(())
        })
        .await
        .context("env file write task panicked")?
    }
}
