//! Dialect contract for SQL statement generation
//!
//! A dialect turns the inputs handed over by an ingestion host (table name,
//! projection, filter/ordering fragments, row bounds) into a statement string
//! for one database engine's syntax. Dialects are stateless; every method is a
//! pure function of its arguments.

pub mod generic;
pub mod oracle;

pub use generic::GenericDialect;
pub use oracle::OracleDialect;

use crate::error::{DialectError, Result};

/// Capability interface for engine-specific SQL generation.
///
/// Only [`select_statement_with_partition`](Self::select_statement_with_partition)
/// is required; every other method has a default body so a dialect opts into
/// exactly the statement kinds its engine supports. Callers are expected to
/// check [`supports_upsert`](Self::supports_upsert) /
/// [`supports_insert_ignore`](Self::supports_insert_ignore) before asking for
/// the corresponding statements.
///
/// # Trust boundary
///
/// `where_clause` and `order_by` fragments are inserted into the generated
/// statement verbatim, without escaping or validation. They must come from a
/// trusted source; passing user-controlled text in them is SQL injection.
pub trait DatabaseDialect: Send + Sync {
    /// Registry key and display name of this dialect (e.g. `"Oracle"`).
    fn name(&self) -> &str;

    /// One-line human-readable description.
    fn description(&self) -> &str;

    /// Returns a SELECT statement with the given clauses applied.
    ///
    /// Delegates to
    /// [`select_statement_with_partition`](Self::select_statement_with_partition)
    /// with no partition column, so clause composition has a single source of
    /// truth. A dialect overriding either method must override both
    /// consistently.
    ///
    /// * `columns` — free-form projection; `None`, blank, or `*` select all
    ///   columns.
    /// * `where_clause` — filter fragment, without the `WHERE` keyword.
    /// * `order_by` — ordering fragment, without the `ORDER BY` keywords.
    /// * `limit` / `offset` — row bounds; `offset + limit` must not overflow
    ///   `u64` (caller precondition).
    fn select_statement(
        &self,
        table: &str,
        columns: Option<&str>,
        where_clause: Option<&str>,
        order_by: Option<&str>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<String> {
        self.select_statement_with_partition(
            table,
            columns,
            where_clause,
            order_by,
            limit,
            offset,
            None,
        )
    }

    /// Returns a SELECT statement, optionally bounding rows by the values of
    /// `partition_column` instead of by row number.
    ///
    /// When a partition column is supplied together with a filter, the row
    /// bounds become value-range predicates on that column
    /// (`col >= offset AND col < offset + limit`) appended to the filter, and
    /// any ordering fragment is suppressed. This produces a resumable
    /// value-range scan instead of an offset scan, which large tables pay for
    /// dearly.
    ///
    /// Errors with [`DialectError::InvalidArgument`] if `table` is blank.
    #[allow(clippy::too_many_arguments)]
    fn select_statement_with_partition(
        &self,
        table: &str,
        columns: Option<&str>,
        where_clause: Option<&str>,
        order_by: Option<&str>,
        limit: Option<u64>,
        offset: Option<u64>,
        partition_column: Option<&str>,
    ) -> Result<String>;

    /// Whether this dialect can generate an UPSERT statement.
    fn supports_upsert(&self) -> bool {
        false
    }

    /// Whether this dialect can generate an INSERT-IGNORE statement.
    fn supports_insert_ignore(&self) -> bool {
        false
    }

    /// Returns an UPSERT statement: update the row if the unique key matches,
    /// insert it otherwise.
    ///
    /// There is no standard syntax for this, so not every dialect supports
    /// it; the default errors with [`DialectError::Unsupported`] naming the
    /// dialect. The generated statement carries one positional placeholder
    /// per entry of `columns`, in the same order.
    fn upsert_statement(
        &self,
        _table: &str,
        _columns: &[&str],
        _unique_key_columns: &[&str],
    ) -> Result<String> {
        Err(DialectError::unsupported("UPSERT", self.name()))
    }

    /// Returns an INSERT-IGNORE statement: insert the row unless the unique
    /// key already exists, in which case do nothing.
    ///
    /// Same support caveat and placeholder contract as
    /// [`upsert_statement`](Self::upsert_statement).
    fn insert_ignore_statement(
        &self,
        _table: &str,
        _columns: &[&str],
        _unique_key_columns: &[&str],
    ) -> Result<String> {
        Err(DialectError::unsupported("INSERT IGNORE", self.name()))
    }

    /// How many times the host must bind the column value list into the
    /// prepared statement's placeholders, or `None` when UPSERT is
    /// unsupported.
    ///
    /// Engines whose upsert form repeats the value list (duplicate-key-update
    /// patterns) override this.
    fn upsert_value_bind_count(&self) -> Option<u32> {
        self.supports_upsert().then_some(1)
    }

    /// Strips wrapping escape characters from an identifier, passing `None`
    /// through. The default removes double quotes; dialects with other escape
    /// characters override.
    fn unwrap_identifier(&self, identifier: Option<&str>) -> Option<String> {
        identifier.map(|id| id.replace('"', ""))
    }

    /// The clause aliasing a table in generated statements. Most engines
    /// accept `AS name`; Oracle takes the bare name.
    fn table_alias_clause(&self, table_name: &str) -> String {
        format!("AS {table_name}")
    }
}

/// Projection for a SELECT: `None`, blank, and `*` all mean every column.
pub(crate) fn select_projection(columns: Option<&str>) -> &str {
    match columns {
        Some(cols) if !cols.trim().is_empty() && cols.trim() != "*" => cols,
        _ => "*",
    }
}

/// Treats whitespace-only fragments the same as absent ones.
pub(crate) fn non_blank(fragment: Option<&str>) -> Option<&str> {
    fragment.filter(|f| !f.trim().is_empty())
}

pub(crate) fn check_table(table: &str) -> Result<()> {
    if table.trim().is_empty() {
        return Err(DialectError::invalid_argument("Table name cannot be blank"));
    }
    Ok(())
}

pub(crate) fn check_columns(columns: &[&str]) -> Result<()> {
    if columns.is_empty() {
        return Err(DialectError::invalid_argument(
            "Column names cannot be empty",
        ));
    }
    Ok(())
}

pub(crate) fn check_key_columns(unique_key_columns: &[&str]) -> Result<()> {
    if unique_key_columns.is_empty() {
        return Err(DialectError::invalid_argument(
            "Key column names cannot be empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bare dialect that only implements the required method, so the provided
    /// defaults are what gets exercised.
    struct BareDialect;

    impl DatabaseDialect for BareDialect {
        fn name(&self) -> &str {
            "Bare"
        }

        fn description(&self) -> &str {
            "Minimal dialect for exercising trait defaults"
        }

        fn select_statement_with_partition(
            &self,
            table: &str,
            columns: Option<&str>,
            _where_clause: Option<&str>,
            _order_by: Option<&str>,
            _limit: Option<u64>,
            _offset: Option<u64>,
            partition_column: Option<&str>,
        ) -> Result<String> {
            check_table(table)?;
            Ok(format!(
                "SELECT {} FROM {} [partition: {:?}]",
                select_projection(columns),
                table,
                partition_column
            ))
        }
    }

    // =========================================================================
    // Delegation Tests
    // =========================================================================

    #[test]
    fn test_short_select_delegates_with_no_partition() {
        let dialect = BareDialect;

        let short = dialect
            .select_statement("t", Some("a"), None, None, None, None)
            .unwrap();
        let long = dialect
            .select_statement_with_partition("t", Some("a"), None, None, None, None, None)
            .unwrap();

        assert_eq!(short, long);
        assert!(short.contains("[partition: None]"));
    }

    // =========================================================================
    // Capability Default Tests
    // =========================================================================

    #[test]
    fn test_upsert_unsupported_by_default() {
        let dialect = BareDialect;

        assert!(!dialect.supports_upsert());

        let err = dialect.upsert_statement("t", &["a"], &["a"]).unwrap_err();
        assert_eq!(err.to_string(), "UPSERT is not supported for Bare");
    }

    #[test]
    fn test_insert_ignore_unsupported_by_default() {
        let dialect = BareDialect;

        assert!(!dialect.supports_insert_ignore());

        let err = dialect
            .insert_ignore_statement("t", &["a"], &["a"])
            .unwrap_err();
        assert_eq!(err.to_string(), "INSERT IGNORE is not supported for Bare");
    }

    #[test]
    fn test_upsert_value_bind_count_tracks_support() {
        assert_eq!(BareDialect.upsert_value_bind_count(), None);
        assert_eq!(OracleDialect.upsert_value_bind_count(), Some(1));
    }

    // =========================================================================
    // Identifier and Alias Default Tests
    // =========================================================================

    #[test]
    fn test_unwrap_identifier_none_passes_through() {
        assert_eq!(BareDialect.unwrap_identifier(None), None);
    }

    #[test]
    fn test_unwrap_identifier_strips_double_quotes() {
        let dialect = BareDialect;

        assert_eq!(
            dialect.unwrap_identifier(Some("\"col\"")),
            Some("col".to_string())
        );
        assert_eq!(
            dialect.unwrap_identifier(Some("a\"b\"c")),
            Some("abc".to_string())
        );
        assert_eq!(
            dialect.unwrap_identifier(Some("plain")),
            Some("plain".to_string())
        );
    }

    #[test]
    fn test_table_alias_clause_default() {
        assert_eq!(BareDialect.table_alias_clause("T"), "AS T");
    }

    // =========================================================================
    // Helper Tests
    // =========================================================================

    #[test]
    fn test_select_projection() {
        assert_eq!(select_projection(None), "*");
        assert_eq!(select_projection(Some("")), "*");
        assert_eq!(select_projection(Some("  ")), "*");
        assert_eq!(select_projection(Some("*")), "*");
        assert_eq!(select_projection(Some(" * ")), "*");
        assert_eq!(select_projection(Some("a, b")), "a, b");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some("a > 1")), Some("a > 1"));
    }

    #[test]
    fn test_check_table_rejects_blank() {
        assert!(check_table("orders").is_ok());
        assert!(check_table("").is_err());
        assert!(check_table("   ").is_err());
    }
}
