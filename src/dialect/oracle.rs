//! Oracle dialect
//!
//! Oracle has no `LIMIT`/`OFFSET`; pagination uses the classic double-nested
//! `ROWNUM` pattern. UPSERT and INSERT-IGNORE are both expressed as `MERGE`
//! against a one-row `SELECT ... FROM dual` source.

use tracing::trace;

use crate::dialect::{
    DatabaseDialect, check_columns, check_key_columns, check_table, non_blank, select_projection,
};
use crate::error::{DialectError, Result};

/// Dialect emitting Oracle-compliant SQL.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleDialect;

impl OracleDialect {
    /// Validates the shared write-statement inputs and renders the
    /// `USING (SELECT ? c1, ? c2, ... FROM dual) t2` source and the
    /// `ON` key predicates used by both MERGE forms.
    ///
    /// The source clause carries exactly one placeholder per entry of
    /// `columns`, in order, which is what fixes the positional binding
    /// contract for the host.
    fn merge_source_and_keys(
        table: &str,
        columns: &[&str],
        unique_key_columns: &[&str],
    ) -> Result<(String, String)> {
        check_table(table)?;
        check_columns(columns)?;
        check_key_columns(unique_key_columns)?;

        let source = columns
            .iter()
            .map(|col| format!("? {col}"))
            .collect::<Vec<_>>()
            .join(", ");

        let on_clause = unique_key_columns
            .iter()
            .map(|key| format!("t1.{key} = t2.{key}"))
            .collect::<Vec<_>>()
            .join(" AND ");

        Ok((source, on_clause))
    }
}

impl DatabaseDialect for OracleDialect {
    fn name(&self) -> &str {
        "Oracle"
    }

    fn description(&self) -> &str {
        "Generates Oracle compliant SQL"
    }

    fn supports_upsert(&self) -> bool {
        true
    }

    fn supports_insert_ignore(&self) -> bool {
        true
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
        trace!(table, "building Oracle SELECT statement");

        let projection = select_projection(columns);
        let partition_column = non_blank(partition_column);
        // ROWNUM nesting is only needed for row-number bounds; value-range
        // partitioning bounds rows in the WHERE clause instead.
        let nested = (limit.is_some() || offset.is_some()) && partition_column.is_none();

        let mut query = String::new();
        if nested {
            query.push_str("SELECT ");
            query.push_str(projection);
            query.push_str(" FROM (SELECT a.*, ROWNUM rnum FROM (");
        }

        query.push_str("SELECT ");
        query.push_str(projection);
        query.push_str(" FROM ");
        query.push_str(table);

        if let Some(filter) = non_blank(where_clause) {
            query.push_str(" WHERE ");
            query.push_str(filter);
            if let Some(partition) = partition_column {
                let start = offset.unwrap_or(0);
                query.push_str(&format!(" AND {partition} >= {start}"));
                if let Some(limit) = limit {
                    query.push_str(&format!(" AND {partition} < {}", start + limit));
                }
            }
        }

        // Partitioning already bounds the scan; an ordering clause would only
        // force a sort the host never relies on.
        if partition_column.is_none() {
            if let Some(order) = non_blank(order_by) {
                query.push_str(" ORDER BY ");
                query.push_str(order);
            }
        }

        if nested {
            query.push_str(") a");
            let start = offset.unwrap_or(0);
            if let Some(limit) = limit {
                query.push_str(&format!(" WHERE ROWNUM <= {}", start + limit));
            }
            query.push_str(&format!(") WHERE rnum > {start}"));
        }

        Ok(query)
    }

    fn upsert_statement(
        &self,
        table: &str,
        columns: &[&str],
        unique_key_columns: &[&str],
    ) -> Result<String> {
        let (source, on_clause) = Self::merge_source_and_keys(table, columns, unique_key_columns)?;
        trace!(table, "building Oracle MERGE upsert statement");

        // Key columns are match predicates only, never reassigned.
        let non_key_columns: Vec<&str> = columns
            .iter()
            .filter(|col| !unique_key_columns.contains(col))
            .copied()
            .collect();
        if non_key_columns.is_empty() {
            return Err(DialectError::invalid_argument(
                "Column names must include at least one non-key column",
            ));
        }

        let update_set = non_key_columns
            .iter()
            .map(|col| format!("t1.{col} = t2.{col}"))
            .collect::<Vec<_>>()
            .join(", ");

        let insert_columns = non_key_columns
            .iter()
            .map(|col| format!("t1.{col}"))
            .collect::<Vec<_>>()
            .join(", ");

        let insert_values = non_key_columns
            .iter()
            .map(|col| format!("t2.{col}"))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!(
            "MERGE INTO {table} t1 USING (SELECT {source} FROM dual) t2 ON ({on_clause}) \
             WHEN MATCHED THEN UPDATE SET {update_set} \
             WHEN NOT MATCHED THEN INSERT ({insert_columns}) VALUES ({insert_values})"
        ))
    }

    fn insert_ignore_statement(
        &self,
        table: &str,
        columns: &[&str],
        unique_key_columns: &[&str],
    ) -> Result<String> {
        let (source, on_clause) = Self::merge_source_and_keys(table, columns, unique_key_columns)?;
        trace!(table, "building Oracle MERGE insert-ignore statement");

        // No WHEN MATCHED branch: a key match leaves the row untouched. The
        // insert covers every supplied column, keys included.
        let insert_columns = columns
            .iter()
            .map(|col| format!("t1.{col}"))
            .collect::<Vec<_>>()
            .join(", ");

        let insert_values = columns
            .iter()
            .map(|col| format!("t2.{col}"))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!(
            "MERGE INTO {table} t1 USING (SELECT {source} FROM dual) t2 ON ({on_clause}) \
             WHEN NOT MATCHED THEN INSERT ({insert_columns}) VALUES ({insert_values})"
        ))
    }

    fn table_alias_clause(&self, table_name: &str) -> String {
        table_name.to_string()
    }
}
