use alcometer::{run_batch, AlcometerError, SeverityPalette, Sex};
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_batch_from_file_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("drinks.csv");
    let output_path = temp_dir.path().join("results.csv");

    let mut input = File::create(&input_path).unwrap();
    writeln!(input, "weight,bottles,hours,sex").unwrap();
    writeln!(input, "70, 2, 1, male").unwrap();
    writeln!(input, "80,1,10,male").unwrap();
    writeln!(input, "abc,4,0,female").unwrap();
    drop(input);

    let summary = run_batch(
        File::open(&input_path).unwrap(),
        File::create(&output_path).unwrap(),
        &SeverityPalette::default(),
        Sex::Male,
    )
    .unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.computed, 2);
    assert_eq!(summary.failed, 1);

    let output = std::fs::read_to_string(&output_path).unwrap();
    let mut reader = csv::Reader::from_reader(output.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(&rows[0][4], "0.34");
    assert_eq!(&rows[0][5], "low");
    assert_eq!(&rows[1][4], "0.00");
    assert_eq!(&rows[2][4], "");
    assert_eq!(&rows[2][7], "missing weight");
}

#[test]
fn test_batch_default_sex_applies_to_blank_column() {
    let input = "weight,bottles,hours,sex\n60,5,0,\n";
    let mut out = Vec::new();

    run_batch(input.as_bytes(), &mut out, &SeverityPalette::default(), Sex::Female).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("1.65,high,red"));
}

#[test]
fn test_batch_invalid_utf8_is_csv_error() {
    let input: &[u8] = b"weight,bottles,hours,sex\n\xff\xfe,2,1,male\n";
    let mut out = Vec::new();

    let outcome = run_batch(input, &mut out, &SeverityPalette::default(), Sex::Male);
    assert!(matches!(outcome, Err(AlcometerError::CsvError(_))));
}
