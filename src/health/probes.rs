//! Dependency probe abstraction and the concrete database probes.
//!
//! A probe answers one question: is this named dependency reachable right
//! now? Probes never mutate or close the resources they inspect.

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::types::DependencyType;

/// Capability interface for a single named dependency check.
///
/// Implementations must treat a failed check as a normal negative result
/// (an `Err` return), not a panic; the aggregator still contains panics at
/// the task boundary.
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// Human-readable dependency identifier.
    fn name(&self) -> &str;

    /// Criticality preset at registration time.
    fn dependency_type(&self) -> DependencyType;

    /// Attempt a zero-cost liveness operation against the dependency.
    async fn check(&self) -> anyhow::Result<()>;
}

/// Reachability probe for a MySQL connection pool.
///
/// Healthy iff a trivial query executes through the pool. The pool is a
/// long-lived shared resource; the probe only borrows it.
pub struct DatabasePingProbe {
    name: String,
    dependency_type: DependencyType,
    pool: MySqlPool,
}

impl DatabasePingProbe {
    pub fn new(
        name: impl Into<String>,
        dependency_type: DependencyType,
        pool: MySqlPool,
    ) -> Self {
        Self {
            name: name.into(),
            dependency_type,
            pool,
        }
    }
}

#[async_trait]
impl DependencyProbe for DatabasePingProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn dependency_type(&self) -> DependencyType {
        self.dependency_type
    }

    async fn check(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
