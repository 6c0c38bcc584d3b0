//! Deployment target: where the stack lives on disk.

use std::path::{Path, PathBuf};

/// Directory created under the user's home by default.
pub const DEFAULT_DIR_NAME: &str = "Postiz";
pub const ENV_FILE: &str = ".env";
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Data directories mounted by the compose template.
pub const DATA_DIRS: [&str; 4] = ["config", "uploads", "db", "redis"];

/// A deployment directory and the files within it. Never relocated
/// automatically once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTarget {
    dir: PathBuf,
}

impl DeploymentTarget {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<home>/Postiz`
    #[must_use]
    pub fn under_home(home: &Path) -> Self {
        Self::new(home.join(DEFAULT_DIR_NAME))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn env_path(&self) -> PathBuf {
        self.dir.join(ENV_FILE)
    }

    #[must_use]
    pub fn compose_path(&self) -> PathBuf {
        self.dir.join(COMPOSE_FILE)
    }

    pub fn data_dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        DATA_DIRS.iter().map(|d| self.dir.join(d))
    }
}

impl std::fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir.display())
    }
}
