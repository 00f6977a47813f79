//! Tests for brood CSV loading.

use std::io::Write;
use std::path::Path;

use brood_ingest::{IngestError, load_broods, read_broods};
use brood_model::SetLabel;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_records_with_optional_columns() {
    let file = write_csv(
        "Mother_ID,origin_mother_id,set_label,status,death_date,brood_ordinal,assigned_person\n\
         E.1_0701,,E,alive,,2,Kim\n\
         E.1.1_0710,E.1_0701,,dead,2025-08-01,,\n\
         ,E.1_0701,E,,,,\n",
    );

    let records = load_broods(file.path()).unwrap();
    assert_eq!(records.len(), 2);

    let founder = &records[0];
    assert_eq!(founder.mother_id, "E.1_0701");
    assert_eq!(founder.origin_mother_id, None);
    assert_eq!(founder.brood_ordinal, Some(2));
    assert_eq!(founder.assigned_person.as_deref(), Some("Kim"));
    assert!(founder.is_alive());

    let child = &records[1];
    assert_eq!(child.origin_mother_id.as_deref(), Some("E.1_0701"));
    // Blank set column falls back to the identifier's letter.
    assert_eq!(child.set_label, Some(SetLabel::new('E').unwrap()));
    assert!(!child.is_alive());
}

#[test]
fn missing_mother_id_column_is_rejected() {
    let csv = "id,status\nE.1_0701,alive\n";
    let error = read_broods(csv.as_bytes(), Path::new("broods.csv")).unwrap_err();
    assert!(matches!(error, IngestError::MissingColumn { ref column, .. } if column == "mother_id"));
}

#[test]
fn invalid_brood_ordinal_reports_row() {
    let csv = "mother_id,brood_ordinal\nE.1_0701,1\nE.1_0801,second\n";
    let error = read_broods(csv.as_bytes(), Path::new("broods.csv")).unwrap_err();
    match error {
        IngestError::InvalidValue { field, value, row, .. } => {
            assert_eq!(field, "brood_ordinal");
            assert_eq!(value, "second");
            assert_eq!(row, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unparseable_set_label_falls_back_to_identifier_letter() {
    let csv = "mother_id,set_label,status\nE.1_0701,E,alive\nA.2_0701,unknown,alive\n";
    let records = read_broods(csv.as_bytes(), Path::new("broods.csv")).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].mother_id, "A.2_0701");
    assert_eq!(records[1].set_label, Some(SetLabel::new('A').unwrap()));
}

#[test]
fn total_broods_is_not_a_brood_ordinal() {
    let csv = "mother_id,total_broods\nE.1_0701,4\n";
    let records = read_broods(csv.as_bytes(), Path::new("broods.csv")).unwrap();
    assert_eq!(records[0].brood_ordinal, None);
}

#[test]
fn missing_file_is_reported() {
    let error = load_broods(Path::new("/nonexistent/broods.csv")).unwrap_err();
    assert!(matches!(error, IngestError::FileNotFound { .. }));
}
