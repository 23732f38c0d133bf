//! # dialect-sqlgen
//!
//! Dialect-aware SQL statement generation for data ingestion pipelines.
//!
//! An ingestion host that pulls rows out of arbitrary customer databases needs
//! SELECT pagination, UPSERT, and INSERT-IGNORE statements in whatever syntax
//! the target engine speaks. This crate provides the statement-generation
//! contract ([`DatabaseDialect`]), a name-keyed [`DialectRegistry`] for
//! picking an implementation from job configuration, and two built-in
//! dialects:
//!
//! - **Generic**: ANSI SQL with `LIMIT`/`OFFSET` pagination; no upsert
//!   support.
//! - **Oracle**: double-nested `ROWNUM` pagination, `MERGE`-based UPSERT and
//!   INSERT-IGNORE, bare-name table aliases.
//!
//! Every call is synchronous, stateless, and returns a freshly built string;
//! executing it (and binding the positional `?` parameters) is the host's
//! job.
//!
//! ## Quick Start
//!
//! ```rust
//! use dialect_sqlgen::{DialectRegistry, SelectQuery};
//!
//! fn main() -> Result<(), dialect_sqlgen::DialectError> {
//!     let registry = DialectRegistry::new();
//!     let oracle = registry.get("Oracle").expect("built-in dialect");
//!
//!     // Paged extraction query
//!     let page = SelectQuery::new("orders")
//!         .columns("id, total")
//!         .filter("total > 100")
//!         .order_by("id")
//!         .paginate(20, 10)
//!         .statement(oracle.as_ref())?;
//!     assert!(page.contains("ROWNUM"));
//!
//!     // Parameterized write-back; the host binds one value per column,
//!     // in column order.
//!     if oracle.supports_upsert() {
//!         let upsert = oracle.upsert_statement(
//!             "order_totals",
//!             &["order_id", "total", "updated_by"],
//!             &["order_id"],
//!         )?;
//!         assert_eq!(upsert.matches('?').count(), 3);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Trust boundary
//!
//! Filter and ordering fragments are inserted into generated statements
//! verbatim. The crate never escapes or validates them beyond blank/empty
//! argument checks; callers must not pass untrusted text in them.

pub mod dialect;
pub mod error;
pub mod query;
pub mod registry;

// Re-export main types for convenience
pub use dialect::{DatabaseDialect, GenericDialect, OracleDialect};
pub use error::{DialectError, Result};
pub use query::SelectQuery;
pub use registry::{DialectRegistry, SharedDialect};
