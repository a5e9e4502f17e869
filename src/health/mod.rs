//! # Health Module
//!
//! Infrastructure health-check aggregation: concurrent dependency probes,
//! per-dependency results, and a single rolled-up verdict.
//!
//! - [`probes`] - the `DependencyProbe` seam and database ping probes
//! - [`checker`] - concurrent fan-out, fault containment, aggregation
//! - [`types`] - wire-shaped result model and verdict constants

pub mod checker;
pub mod probes;
pub mod types;

pub use checker::HealthChecker;
pub use probes::{DatabasePingProbe, DependencyProbe};
pub use types::{
    AggregatedHealthResult, DependencyCheckItem, DependencyType, COUGHING_MSG, DYING_MSG,
    HEALTHY_MSG,
};
