use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;
use tabshape::{
    melt_table, read_table, record, select, synthesize, InsertConfig, InsertSynthesizer,
    LineSink, MeltConfig, RecordSink, ReshapeError, TableFormat,
};
use tempfile::NamedTempFile;

fn write_input(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_select_file_to_file() {
    let input = write_input("id,name,score\n1,alice,9\n2,bob\n");
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.csv");

    let format = TableFormat::default();
    let records = read_table(input.path(), &format).unwrap();
    let selection = select(&records, &[2, 0, 2]);

    let out = fs::File::create(&out_path).unwrap();
    let mut sink = RecordSink::new(out, &format);
    sink.write_records(&selection.records).unwrap();
    sink.flush().unwrap();

    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        "score,id\n9,1\n2\n"
    );
    assert_eq!(selection.diagnostics.len(), 1);
    assert_eq!(
        selection.diagnostics[0].to_string(),
        "row 3 has no column 2 (row has 2 columns)"
    );
}

#[test]
fn test_melt_tab_separated() {
    let input = write_input("region\tq1\tq2\nnorth\t10\t20\nsouth\t30\n");
    let format = TableFormat { delimiter: b'\t' };

    let table = read_table(input.path(), &format).unwrap();
    let melted = melt_table(&table, &[1, 2], MeltConfig::default()).unwrap();

    let mut buffer = Vec::new();
    {
        let mut sink = RecordSink::new(&mut buffer, &format);
        sink.write_record(&melted.header).unwrap();
        sink.write_records(&melted.records).unwrap();
        sink.flush().unwrap();
    }

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "region\tk\tv\n\
         north\tq1\t10\n\
         north\tq2\t20\n\
         south\tq1\t30\n\
         south\tq2\t\n"
    );
}

#[test]
fn test_melt_validation_failure_is_invalid_input() {
    let input = write_input("a,b,c,d\n1,2,3,4\n");
    let table = read_table(input.path(), &TableFormat::default()).unwrap();

    let err = melt_table(&table, &[5], MeltConfig::default()).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(err, ReshapeError::ColumnOutOfRange { index: 5, width: 4 }));
}

#[test]
fn test_missing_input_is_not_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_table(dir.path().join("absent.csv"), &TableFormat::default()).unwrap_err();

    assert!(matches!(err, ReshapeError::FileNotFound(_)));
    assert!(!err.is_invalid_input());
}

#[test]
fn test_insert_with_bom_and_blank_lines() {
    let input = write_input("\u{feff}x,y'z\n\n\"a,b\",c\n");
    let records = read_table(input.path(), &TableFormat::default()).unwrap();
    let statements = synthesize(&records, "t", Some("2025-11-30"));

    let mut buffer = Vec::new();
    let mut sink = LineSink::new(&mut buffer);
    sink.write_lines(&statements).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "INSERT INTO t VALUES (DEFAULT, 'x', 'y''z', '2025-11-30');\n\
         INSERT INTO t VALUES (DEFAULT, 'a,b', 'c', '2025-11-30');\n"
    );
}

#[test]
fn test_insert_without_surrogate_key() {
    let records = vec![record(&["1", "o'neil"])];
    let config = InsertConfig {
        surrogate_key: None,
        max_literal_chars: 3,
    };
    let statements = InsertSynthesizer::new("people", None, config).synthesize(&records);
    assert_eq!(statements, vec!["INSERT INTO people VALUES ('1', 'o''n');".to_string()]);
}
