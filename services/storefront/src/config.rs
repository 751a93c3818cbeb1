use serde::Deserialize;

use storefront_core::config::Config;

/// Storefront service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct StorefrontConfig {
    /// Database connection URL (`postgres://…` or `sqlite://…`). Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 5000). Env var: `STOREFRONT_PORT`.
    #[serde(default = "default_port")]
    pub storefront_port: u16,
    /// Apply pending migrations before serving (default true). Env var: `RUN_MIGRATIONS`.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Config for StorefrontConfig {}

fn default_port() -> u16 {
    5000
}

fn default_run_migrations() -> bool {
    true
}
