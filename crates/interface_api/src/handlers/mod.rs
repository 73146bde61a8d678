//! Request handlers, one module per resource

pub mod health;
pub mod registry;
pub mod transactions;
pub mod requests;
pub mod metrics;
pub mod statements;
