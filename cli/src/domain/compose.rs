//! Compose file template and the compose subcommands the orchestrator issues.

use std::path::Path;

/// Name of the application's own service in the compose file.
pub const APP_SERVICE: &str = "postiz";

/// Substitution token replaced by the deployment directory.
pub const FOLDER_TOKEN: &str = "{POSTIZ_FOLDER}";

const TEMPLATE: &str = r"services:
  postiz:
    image: ghcr.io/gitroomhq/postiz-app:latest
    container_name: postiz
    restart: always
    env_file:
      - {POSTIZ_FOLDER}/.env
    volumes:
      - {POSTIZ_FOLDER}/config:/config/
      - {POSTIZ_FOLDER}/uploads:/uploads/
    ports:
      - 5000:5000
    networks:
      - postiz-network
    depends_on:
      postiz-postgres:
        condition: service_healthy
      postiz-redis:
        condition: service_healthy

  postiz-postgres:
    image: postgres:17-alpine
    container_name: postiz-postgres
    restart: always
    environment:
      POSTGRES_PASSWORD: postiz-password
      POSTGRES_USER: postiz-user
      POSTGRES_DB: postiz-db-local
    volumes:
      - {POSTIZ_FOLDER}/db:/var/lib/postgresql/data
    networks:
      - postiz-network
    healthcheck:
      test: pg_isready -U postiz-user -d postiz-db-local
      interval: 10s
      timeout: 3s
      retries: 3

  postiz-redis:
    image: redis:7.2
    container_name: postiz-redis
    restart: always
    healthcheck:
      test: redis-cli ping
      interval: 10s
      timeout: 3s
      retries: 3
    volumes:
      - {POSTIZ_FOLDER}/redis:/data
    networks:
      - postiz-network

networks:
  postiz-network:
    driver: bridge
";

/// Render the compose file for a deployment directory.
///
/// Backslashes are normalized to forward slashes so Windows paths work as
/// compose volume sources.
#[must_use]
pub fn render_compose(dir: &Path) -> String {
    let folder = dir.to_string_lossy().replace('\\', "/");
    let folder = folder.trim_end_matches('/');
    TEMPLATE.replace(FOLDER_TOKEN, folder)
}

/// A compose subcommand issued against the deployment directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposeStep {
    /// `ps --services --filter status=running`
    ListRunning,
    /// `up -d`
    Up,
    /// `up -d --force-recreate`
    ForceRecreate,
    /// `pull`
    Pull,
    /// `down`
    Down,
}

impl ComposeStep {
    /// Arguments passed after `compose -f <file>`.
    #[must_use]
    pub fn args(self) -> &'static [&'static str] {
        match self {
            Self::ListRunning => &["ps", "--services", "--filter", "status=running"],
            Self::Up => &["up", "-d"],
            Self::ForceRecreate => &["up", "-d", "--force-recreate"],
            Self::Pull => &["pull"],
            Self::Down => &["down"],
        }
    }

    /// Short stage name used in outcomes and logs.
    #[must_use]
    pub fn stage(self) -> &'static str {
        match self {
            Self::ListRunning => "ps",
            Self::Up => "up",
            Self::ForceRecreate => "recreate",
            Self::Pull => "pull",
            Self::Down => "down",
        }
    }

    /// The subcommand as a user would type it after `compose`.
    #[must_use]
    pub fn subcommand(self) -> String {
        self.args().join(" ")
    }

    /// Whether the step may pull images or recreate containers.
    #[must_use]
    pub fn is_long_running(self) -> bool {
        !matches!(self, Self::ListRunning)
    }
}

impl std::fmt::Display for ComposeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "compose {}", self.subcommand())
    }
}

/// Whether `ps --services` output lists `service` on a line of its own.
#[must_use]
pub fn lists_service(ps_output: &str, service: &str) -> bool {
    ps_output.lines().any(|line| line.trim() == service)
}
