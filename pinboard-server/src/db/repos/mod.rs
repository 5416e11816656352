//! Repository implementations for database access
//!
//! Each repository is a trait with a PostgreSQL implementation and an
//! in-memory one for tests and database-less runs.

pub mod pins;

pub use pins::{MemoryPinStore, PgPinStore, PinStore, StoreError};
