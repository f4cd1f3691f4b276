use crate::config::MeltConfig;
use crate::error::{ReshapeError, Result};
use crate::melt::plan::MeltPlan;
use crate::types::{ColumnIndex, Record};
use tracing::debug;

/// Reshapes rows from wide to long format against a fixed header
pub struct Melter {
    plan: MeltPlan,
    source_header: Record,
    /// Kept column names followed by the key and value labels
    header: Record,
}

impl Melter {
    /// Validate the melt columns against `header` and prepare the output header.
    pub fn new(header: &[String], melt_indices: &[ColumnIndex], config: MeltConfig) -> Result<Self> {
        let plan = MeltPlan::new(header.len(), melt_indices)?;

        let mut out_header: Record = plan.keep.iter().map(|&i| header[i].clone()).collect();
        out_header.push(config.key_column);
        out_header.push(config.value_column);

        Ok(Melter {
            plan,
            source_header: header.to_vec(),
            header: out_header,
        })
    }

    /// Melt one data row into exactly one output row per melt column
    pub fn melt_row(&self, row: &[String]) -> Vec<Record> {
        let cells = self.plan.normalize(row);
        let kept: Vec<String> = self.plan.keep.iter().map(|&i| cells[i].to_string()).collect();

        self.plan
            .melt
            .iter()
            .map(|&idx| {
                let mut out = Vec::with_capacity(kept.len() + 2);
                out.extend(kept.iter().cloned());
                out.push(self.source_header[idx].clone());
                out.push(cells[idx].to_string());
                out
            })
            .collect()
    }

    /// Melt every data row, grouped by source row
    pub fn melt_all(&self, data: &[Record]) -> Vec<Record> {
        let mut records = Vec::with_capacity(data.len() * self.plan.melt.len());
        for row in data {
            records.extend(self.melt_row(row));
        }
        debug!(input = data.len(), output = records.len(), "melted table");
        records
    }
}

/// Result of melting a whole table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Melted {
    pub header: Record,
    pub records: Vec<Record>,
}

/// Melt `data` using the column names in `header`, with default labels
pub fn melt(header: &[String], data: &[Record], melt_indices: &[ColumnIndex]) -> Result<Melted> {
    let melter = Melter::new(header, melt_indices, MeltConfig::default())?;
    Ok(Melted {
        records: melter.melt_all(data),
        header: melter.header,
    })
}

/// Melt a table whose first record is the header
pub fn melt_table(
    table: &[Record],
    melt_indices: &[ColumnIndex],
    config: MeltConfig,
) -> Result<Melted> {
    let (header, data) = table.split_first().ok_or(ReshapeError::EmptyTable)?;
    let melter = Melter::new(header, melt_indices, config)?;
    Ok(Melted {
        records: melter.melt_all(data),
        header: melter.header,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record;
    use pretty_assertions::assert_eq;

    fn header() -> Record {
        record(&["a", "b", "c", "d"])
    }

    #[test]
    fn test_two_melt_columns_double_the_rows() {
        let result = melt(&header(), &[record(&["1", "2", "3", "4"])], &[2, 3]).unwrap();

        assert_eq!(result.header, record(&["a", "b", "k", "v"]));
        assert_eq!(
            result.records,
            vec![record(&["1", "2", "c", "3"]), record(&["1", "2", "d", "4"])]
        );
    }

    #[test]
    fn test_melt_follows_caller_order() {
        let result = melt(&header(), &[record(&["1", "2", "3", "4"])], &[3, 0]).unwrap();

        assert_eq!(result.header, record(&["b", "c", "k", "v"]));
        assert_eq!(
            result.records,
            vec![record(&["2", "3", "d", "4"]), record(&["2", "3", "a", "1"])]
        );
    }

    #[test]
    fn test_rows_grouped_by_source_row() {
        let data = vec![record(&["1", "2", "3", "4"]), record(&["5", "6", "7", "8"])];
        let result = melt(&header(), &data, &[1, 2]).unwrap();

        let keys: Vec<(&str, &str)> = result
            .records
            .iter()
            .map(|r| (r[0].as_str(), r[2].as_str()))
            .collect();
        assert_eq!(keys, vec![("1", "b"), ("1", "c"), ("5", "b"), ("5", "c")]);
    }

    #[test]
    fn test_out_of_range_aborts_with_no_rows() {
        let result = melt(&header(), &[record(&["1", "2", "3", "4"])], &[5]);
        assert!(matches!(
            result,
            Err(ReshapeError::ColumnOutOfRange { index: 5, width: 4 })
        ));
    }

    #[test]
    fn test_ragged_rows_normalised() {
        let data = vec![record(&["1", "2"]), record(&["5", "6", "7", "8", "9", "10"])];
        let result = melt(&header(), &data, &[3]).unwrap();

        assert_eq!(
            result.records,
            vec![
                record(&["1", "2", "", "d", ""]),
                record(&["5", "6", "7", "d", "8"]),
            ]
        );
    }

    #[test]
    fn test_row_multiplicity_independent_of_content() {
        let data = vec![Vec::new(), record(&["only"])];
        let result = melt(&header(), &data, &[0, 1, 2]).unwrap();
        assert_eq!(result.records.len(), 6);
        assert!(result.records.iter().all(|r| r.len() == 3));
    }

    #[test]
    fn test_custom_labels_and_table_entry_point() {
        let table = vec![header(), record(&["1", "2", "3", "4"])];
        let config = MeltConfig {
            key_column: "metric".to_string(),
            value_column: "amount".to_string(),
        };
        let result = melt_table(&table, &[0], config).unwrap();
        assert_eq!(result.header, record(&["b", "c", "d", "metric", "amount"]));
        assert_eq!(result.records, vec![record(&["2", "3", "4", "a", "1"])]);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            melt_table(&[], &[0], MeltConfig::default()),
            Err(ReshapeError::EmptyTable)
        ));
    }
}
