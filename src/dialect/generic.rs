//! Generic ANSI dialect
//!
//! The fallback variant for engines that accept plain `LIMIT`/`OFFSET`
//! pagination. Write statements (UPSERT, INSERT-IGNORE) have no portable
//! syntax, so this dialect leaves the erroring trait defaults in place.

use tracing::trace;

use crate::dialect::{DatabaseDialect, check_table, non_blank, select_projection};
use crate::error::Result;

/// Dialect emitting ANSI SQL with `LIMIT`/`OFFSET` pagination.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl DatabaseDialect for GenericDialect {
    fn name(&self) -> &str {
        "Generic"
    }

    fn description(&self) -> &str {
        "Generates ANSI SQL"
    }

    fn select_statement_with_partition(
        &self,
        table: &str,
        columns: Option<&str>,
        where_clause: Option<&str>,
        order_by: Option<&str>,
        limit: Option<u64>,
        offset: Option<u64>,
        partition_column: Option<&str>,
    ) -> Result<String> {
        check_table(table)?;
        trace!(table, "building generic SELECT statement");

        let partition_column = non_blank(partition_column);

        let mut query = String::from("SELECT ");
        query.push_str(select_projection(columns));
        query.push_str(" FROM ");
        query.push_str(table);

        if let Some(filter) = non_blank(where_clause) {
            query.push_str(" WHERE ");
            query.push_str(filter);
            // Partition bounds ride on the existing filter as value-range
            // predicates; without a filter the scan stays unbounded.
            if let Some(partition) = partition_column {
                let start = offset.unwrap_or(0);
                query.push_str(&format!(" AND {partition} >= {start}"));
                if let Some(limit) = limit {
                    query.push_str(&format!(" AND {partition} < {}", start + limit));
                }
            }
        }

        if partition_column.is_none() {
            if let Some(order) = non_blank(order_by) {
                query.push_str(" ORDER BY ");
                query.push_str(order);
            }
            if let Some(limit) = limit {
                query.push_str(&format!(" LIMIT {limit}"));
            }
            if let Some(offset) = offset {
                // OFFSET 0 is noise; skip it.
                if offset > 0 {
                    query.push_str(&format!(" OFFSET {offset}"));
                }
            }
        }

        Ok(query)
    }
}
