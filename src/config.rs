use crate::escape::MAX_LITERAL_CHARS;

/// How delimited tables are read and written
#[derive(Debug, Clone)]
pub struct TableFormat {
    /// Field delimiter, a single byte
    pub delimiter: u8,
}

impl Default for TableFormat {
    fn default() -> Self {
        TableFormat {
            delimiter: b',',
        }
    }
}

/// Configuration for the wide-to-long melt
#[derive(Debug, Clone)]
pub struct MeltConfig {
    /// Header label of the key column
    pub key_column: String,

    /// Header label of the value column
    pub value_column: String,
}

impl Default for MeltConfig {
    fn default() -> Self {
        MeltConfig {
            key_column: String::from("k"),
            value_column: String::from("v"),
        }
    }
}

/// Configuration for INSERT statement synthesis
#[derive(Debug, Clone)]
pub struct InsertConfig {
    /// Token placed before the row values for an auto-generated key column.
    /// `None` emits the row values only.
    pub surrogate_key: Option<String>,

    /// Characters kept from each value before quoting
    pub max_literal_chars: usize,
}

impl Default for InsertConfig {
    fn default() -> Self {
        InsertConfig {
            surrogate_key: Some(String::from("DEFAULT")),
            max_literal_chars: MAX_LITERAL_CHARS,
        }
    }
}
