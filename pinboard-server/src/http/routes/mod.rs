//! Route handlers organized by resource

pub mod health;
pub mod pins;
pub mod search;
