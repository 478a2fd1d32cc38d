//! Route handlers. Thin: extract, delegate to a service, map errors.

pub mod health;
pub mod inference;
pub mod models;
