//! # Web API Application State
//!
//! Shared state for request handlers: configuration, the master/slave pool
//! pair, and the health checker with its registered probes.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::DatabasePools;
use crate::health::{DatabasePingProbe, DependencyType, HealthChecker};

/// Shared application state, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pools: DatabasePools,
    pub health: Arc<HealthChecker>,
}

impl AppState {
    /// Build state with the standard probe set: master and slave database
    /// reachability, both registered as hard dependencies.
    pub fn new(config: AppConfig, pools: DatabasePools) -> Self {
        let health = HealthChecker::new(config.health.probe_timeout())
            .register(Arc::new(DatabasePingProbe::new(
                "Master Database SQL",
                DependencyType::Hard,
                pools.master.clone(),
            )))
            .register(Arc::new(DatabasePingProbe::new(
                "Slave Database SQL",
                DependencyType::Hard,
                pools.slave.clone(),
            )));

        Self {
            config: Arc::new(config),
            pools,
            health: Arc::new(health),
        }
    }

    /// Build state with a caller-supplied health checker. Used by tests to
    /// substitute probe implementations.
    pub fn with_health_checker(
        config: AppConfig,
        pools: DatabasePools,
        health: HealthChecker,
    ) -> Self {
        Self {
            config: Arc::new(config),
            pools,
            health: Arc::new(health),
        }
    }
}
