//! Data models and their SQL access methods.

pub mod movie;

pub use movie::{Movie, NewMovie};
