//! Parsing and ordering of PostgreSQL server version strings.
//!
//! ```
//! use pg_version::PgVersion;
//!
//! let v: PgVersion = "PostgreSQL 9.2.8 on x86_64-unknown-linux-gnu, compiled by gcc 4.8.2, 64-bit"
//!     .parse()
//!     .unwrap();
//! assert_eq!(v.major_minor(), "9.2");
//! assert!(v.cmp_release(&PgVersion::new(9, 2, None)).is_lt());
//! ```

pub mod config;
pub mod version;

pub use version::error::VersionError;
pub use version::parser::VersionParser;
pub use version::pg_version::{PgVersion, ReleaseKey};
pub use version::stage::{ReleaseState, Stage};
