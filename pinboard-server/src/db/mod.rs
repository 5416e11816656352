//! Database layer - connection pool, schema bootstrap and the pin store
//!
//! # Design Principles
//!
//! - Pool created lazily: an unreachable database fails requests, not startup
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - One statement per operation, no transactions

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_from_url};
pub use repos::*;
