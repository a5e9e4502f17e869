//! Result model for dependency health aggregation.
//!
//! One aggregation run produces exactly one [`AggregatedHealthResult`]: a
//! completion-ordered set of per-dependency items plus a single textual
//! verdict. Items are immutable once created; a new run builds a new set.

use serde::{Deserialize, Serialize};

/// Overall verdict when every dependency reports healthy.
pub const HEALTHY_MSG: &str = "It's healthy as hell.";

/// Overall verdict when only soft dependencies are unhealthy.
pub const COUGHING_MSG: &str = "It's getting cough. Please check the soft dependency.";

/// Overall verdict when at least one hard dependency is unhealthy.
pub const DYING_MSG: &str = "It's dying. Please check the hard dependency.";

/// Criticality of a dependency.
///
/// A hard dependency failing marks the whole service unhealthy; a soft
/// dependency failing only degrades the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    Hard,
    Soft,
}

/// Result of probing one dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyCheckItem {
    /// Human-readable dependency identifier, e.g. "Master Database SQL".
    pub name: String,
    pub is_healthy: bool,
    pub dependency_type: DependencyType,
    /// Stringified probe error; empty when healthy.
    pub remarks: String,
}

impl DependencyCheckItem {
    pub fn healthy(name: impl Into<String>, dependency_type: DependencyType) -> Self {
        Self {
            name: name.into(),
            is_healthy: true,
            dependency_type,
            remarks: String::new(),
        }
    }

    pub fn unhealthy(
        name: impl Into<String>,
        dependency_type: DependencyType,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            is_healthy: false,
            dependency_type,
            remarks: remarks.into(),
        }
    }
}

/// Accumulated outcome of one aggregation run.
///
/// `items` reflects probe completion order, not registration order; the
/// verdict is an order-independent predicate over the set.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedHealthResult {
    pub items: Vec<DependencyCheckItem>,
    pub result: String,
    /// True unless at least one hard dependency is unhealthy. Drives the
    /// HTTP status only; never serialized.
    #[serde(skip)]
    pub is_ok: bool,
}

impl AggregatedHealthResult {
    /// Compute the verdict over a closed item set.
    ///
    /// A hard failure forces `is_ok = false` and always dominates the soft
    /// degradation message regardless of item order.
    pub fn from_items(items: Vec<DependencyCheckItem>) -> Self {
        let mut is_ok = true;
        let mut any_unhealthy = false;

        for item in &items {
            if !item.is_healthy {
                any_unhealthy = true;
                if item.dependency_type == DependencyType::Hard {
                    is_ok = false;
                }
            }
        }

        let result = if !is_ok {
            DYING_MSG
        } else if any_unhealthy {
            COUGHING_MSG
        } else {
            HEALTHY_MSG
        };

        Self {
            items,
            result: result.to_string(),
            is_ok,
        }
    }
}
