//! Version value layer for PostgreSQL release identifiers
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Parser    │────▶│  PgVersion  │◀────│  Releases   │
//! │  (grammar)  │     │   (value)   │     │ (sort/find) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │    Stage    │     │ ReleaseKey  │
//! │(patch token)│     │ (ordering)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`parser`]: Regex grammar for `SELECT version()` output
//! - [`stage`]: Lifecycle state with its revision or point payload
//! - [`pg_version`]: The immutable version value and its total order
//! - [`releases`]: Batch parsing, sorting and "latest" lookups
//! - [`error`]: Error types for construction and parsing

pub mod error;
pub mod parser;
pub mod pg_version;
pub mod releases;
pub mod stage;
