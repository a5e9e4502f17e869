//! # movie-api
//!
//! RESTful movie catalog service backed by master/slave MySQL pools, with
//! an aggregated infrastructure health-check engine.
//!
//! ## Modules
//!
//! - [`health`] - concurrent dependency probing and verdict aggregation
//! - [`web`] - axum transport layer (routes, handlers, envelope)
//! - [`models`] - data models and SQL access
//! - [`database`] - master/slave pool construction
//! - [`config`] - environment-aware YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod database;
pub mod health;
pub mod logging;
pub mod models;
pub mod web;

pub use config::AppConfig;
pub use database::DatabasePools;
pub use health::HealthChecker;
