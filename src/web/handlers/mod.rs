//! Request handlers, grouped by endpoint family.

pub mod health;
pub mod movies;
