//! INSERT statement synthesis
//!
//! Every non-blank row becomes one `INSERT INTO {table} VALUES (...);` line.
//! The table name is written as given.

use crate::config::InsertConfig;
use crate::escape::escape_with_limit;
use crate::types::Record;
use tracing::debug;

/// Builds INSERT statements for a single target table
pub struct InsertSynthesizer {
    table: String,
    partition: Option<String>,
    config: InsertConfig,
}

impl InsertSynthesizer {
    /// `partition`, when present, is appended to every row as a trailing value
    pub fn new(table: impl Into<String>, partition: Option<String>, config: InsertConfig) -> Self {
        InsertSynthesizer {
            table: table.into(),
            partition,
            config,
        }
    }

    /// Statement for one row, or `None` for a row with no cells
    pub fn statement(&self, row: &[String]) -> Option<String> {
        if row.is_empty() {
            return None;
        }

        let limit = self.config.max_literal_chars;
        let mut values: Vec<String> = Vec::with_capacity(row.len() + 2);
        if let Some(key) = &self.config.surrogate_key {
            values.push(key.clone());
        }
        values.extend(row.iter().map(|cell| escape_with_limit(Some(cell), limit)));
        if let Some(partition) = &self.partition {
            values.push(escape_with_limit(Some(partition), limit));
        }

        Some(format!(
            "INSERT INTO {} VALUES ({});",
            self.table,
            values.join(", ")
        ))
    }

    pub fn synthesize(&self, records: &[Record]) -> Vec<String> {
        let statements: Vec<String> = records.iter().filter_map(|r| self.statement(r)).collect();
        debug!(table = %self.table, rows = records.len(), statements = statements.len(), "synthesized inserts");
        statements
    }
}

/// One statement per non-blank row of `records`, with the default surrogate key
pub fn synthesize(records: &[Record], table: &str, partition: Option<&str>) -> Vec<String> {
    InsertSynthesizer::new(table, partition.map(str::to_string), InsertConfig::default())
        .synthesize(records)
}
