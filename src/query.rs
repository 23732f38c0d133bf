//! Owned SELECT inputs with a fluent builder
//!
//! Ingestion jobs often arrive as JSON configuration; [`SelectQuery`] is the
//! serializable carrier for the SELECT inputs of one extraction. It adds no
//! semantics of its own: [`statement`](SelectQuery::statement) hands
//! everything to the dialect.

use serde::{Deserialize, Serialize};

use crate::dialect::DatabaseDialect;
use crate::error::Result;

/// Inputs for one SELECT statement, independent of any dialect.
///
/// The `where_clause` and `order_by` fragments are passed to the dialect
/// verbatim; see the trust-boundary note on [`DatabaseDialect`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectQuery {
    /// Table to fetch rows from
    pub table: String,
    /// Projection; `None` or `*` select all columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<String>,
    /// Filter fragment, without the `WHERE` keyword
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<String>,
    /// Ordering fragment, without the `ORDER BY` keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Maximum number of rows to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Number of rows (or column values, in partition mode) to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Column whose value range bounds the scan instead of row numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_column: Option<String>,
}

impl SelectQuery {
    /// Creates a query selecting all columns of `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: None,
            where_clause: None,
            order_by: None,
            limit: None,
            offset: None,
            partition_column: None,
        }
    }

    /// Sets the projection string (e.g. `"id, name"`).
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    /// Sets the filter fragment, without the `WHERE` keyword.
    pub fn filter(mut self, where_clause: impl Into<String>) -> Self {
        self.where_clause = Some(where_clause.into());
        self
    }

    /// Sets the ordering fragment, without the `ORDER BY` keywords.
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Sets the row limit.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the row offset.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets offset and limit in one call.
    pub fn paginate(self, offset: u64, limit: u64) -> Self {
        self.offset(offset).limit(limit)
    }

    /// Bounds the scan by this column's values instead of row numbers.
    pub fn partition_column(mut self, column: impl Into<String>) -> Self {
        self.partition_column = Some(column.into());
        self
    }

    /// Renders this query as a statement in the given dialect.
    pub fn statement(&self, dialect: &dyn DatabaseDialect) -> Result<String> {
        dialect.select_statement_with_partition(
            &self.table,
            self.columns.as_deref(),
            self.where_clause.as_deref(),
            self.order_by.as_deref(),
            self.limit,
            self.offset,
            self.partition_column.as_deref(),
        )
    }
}
