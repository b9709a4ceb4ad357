use std::{sync::Arc, time::Duration};

use hub_core::{anyhow::Result, clap, prelude::*};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Connection settings. The URL carries host, credentials, database name,
/// port and TLS mode and is always supplied by the environment.
#[derive(Debug, clap::Args)]
pub struct DbArgs {
    #[arg(long, env)]
    pub database_url: String,

    /// Postgres `search_path` applied to every pooled connection.
    #[arg(long, env)]
    pub database_schema: Option<String>,

    #[arg(long, env, default_value_t = 10)]
    pub max_connections: u32,

    #[arg(long, env, default_value_t = 1)]
    pub min_connections: u32,

    #[arg(long, env, default_value_t = 10)]
    pub connect_timeout_secs: u64,
}

/// Shared database handle, opened once per process.
#[derive(Debug, Clone)]
pub struct Connection(Arc<DatabaseConnection>);

impl Connection {
    /// Res
    ///
    /// # Errors
    /// This function fails if the database cannot be reached
    pub async fn new(args: DbArgs) -> Result<Self> {
        let DbArgs {
            database_url,
            database_schema,
            max_connections,
            min_connections,
            connect_timeout_secs,
        } = args;

        let mut options = ConnectOptions::new(database_url);
        options
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .sqlx_logging(true);

        if let Some(schema) = database_schema {
            options.set_schema_search_path(schema);
        }

        let db = Database::connect(options)
            .await
            .context("failed to connect to postgres")?;

        debug!(max_connections, min_connections, "database pool ready");

        Ok(Self(Arc::new(db)))
    }

    #[must_use]
    pub fn get(&self) -> &DatabaseConnection {
        &self.0
    }
}

impl From<DatabaseConnection> for Connection {
    fn from(db: DatabaseConnection) -> Self {
        Self(Arc::new(db))
    }
}
