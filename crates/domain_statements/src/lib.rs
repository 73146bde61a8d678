//! Statement Formatter
//!
//! Lays out purchase confirmations, BAS summaries, portfolio valuations
//! and transaction histories as ordered, labelled lines. The line model
//! is the product; `render_text` is one consumer of it.

pub mod format;
pub mod branding;
pub mod statement;
pub mod builder;
pub mod render;
pub mod error;

pub use branding::Branding;
pub use statement::{Statement, StatementHeader, StatementKind, StatementLine, StatementSection};
pub use builder::StatementBuilder;
pub use render::render_text;
pub use error::StatementError;
