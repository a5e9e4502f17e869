//! # Database Pools
//!
//! Construction of the master (write) and slave (read) MySQL connection
//! pools. Reads go to the slave, writes to the master; the health probes
//! borrow both pools read-only.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;
use tracing::debug;

use crate::config::{DatabaseConfig, DatabaseConnectionConfig};

/// Long-lived master/slave pool pair shared across the service.
#[derive(Clone)]
pub struct DatabasePools {
    pub master: MySqlPool,
    pub slave: MySqlPool,
}

impl DatabasePools {
    /// Connect both pools eagerly, failing fast when either side is
    /// unreachable at startup.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let master = connect_pool(&config.master, "master").await?;
        let slave = connect_pool(&config.slave, "slave").await?;
        Ok(Self { master, slave })
    }

    /// Build both pools without touching the network. Connections are
    /// established on first use; probing a lazy pool against a dead
    /// database fails at acquire time.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        Ok(Self {
            master: pool_options(&config.master).connect_lazy(&config.master.url())?,
            slave: pool_options(&config.slave).connect_lazy(&config.slave.url())?,
        })
    }
}

fn pool_options(conn: &DatabaseConnectionConfig) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(conn.max_connections)
        .acquire_timeout(Duration::from_secs(conn.acquire_timeout_secs))
        .test_before_acquire(true)
}

async fn connect_pool(
    conn: &DatabaseConnectionConfig,
    role: &str,
) -> Result<MySqlPool, sqlx::Error> {
    debug!(
        role = role,
        host = %conn.host,
        database = %conn.name,
        max_connections = conn.max_connections,
        "connecting database pool"
    );

    pool_options(conn).connect(&conn.url()).await
}
