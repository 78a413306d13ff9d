//! CSV export integration tests

use chrono::{TimeZone, Utc};
use reportdesk_api_types::{Department, Report, ReportPriority, ReportStatus};
use reportdesk_output::{
    format_for_export, to_csv, CsvExporter, ExportError, FilesystemConfig, FilesystemDestination,
    DEFAULT_DATE_FORMAT, REPORTS_CSV_HEADERS,
};
use tempfile::TempDir;

fn report(id: i64, title: &str) -> Report {
    Report {
        id,
        title: title.to_string(),
        status: ReportStatus::Approved,
        department: Department::new("Marketing"),
        priority: ReportPriority::Low,
        author: "Lisa Anderson".to_string(),
        report_type: "User Activity".to_string(),
        record_count: 12_000,
        created_at: Utc.with_ymd_and_hms(2024, 2, 3, 8, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 14, 17, 45, 0).unwrap(),
    }
}

fn read_back(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers().unwrap().iter().map(str::to_string).collect();
    let records = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, records)
}

#[test]
fn test_round_trip_through_csv_reader() {
    let reports = vec![
        report(1, "Report with \"quotes\" and, commas"),
        report(2, "Plain title"),
    ];
    let rows = format_for_export(&reports, DEFAULT_DATE_FORMAT).unwrap();
    let text = to_csv(&rows, Some(&REPORTS_CSV_HEADERS));

    assert!(text.contains("\"Report with \"\"quotes\"\" and, commas\""));

    let (headers, records) = read_back(&text);
    assert_eq!(headers, REPORTS_CSV_HEADERS.to_vec());
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        vec![
            "1",
            "Report with \"quotes\" and, commas",
            "approved",
            "Marketing",
            "low",
            "Lisa Anderson",
            "2/3/2024",
            "2/14/2024",
        ]
    );
    assert_eq!(records[1][1], "Plain title");
}

#[tokio::test]
async fn test_export_reports_to_filesystem() {
    let temp = TempDir::new().unwrap();
    let destination = FilesystemDestination::new(FilesystemConfig::new(temp.path()));
    let exporter = CsvExporter::new("reports");

    let result = exporter
        .export_reports(&[report(7, "Budget Analysis 2")], &destination)
        .await
        .unwrap();

    let location = result.location.unwrap();
    let filename = std::path::Path::new(&location)
        .file_name()
        .unwrap()
        .to_string_lossy()
        .to_string();
    assert_eq!(filename, format!("reports-{}.csv", Utc::now().format("%Y-%m-%d")));

    let text = std::fs::read_to_string(&location).unwrap();
    let (_, records) = read_back(&text);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0][0], "7");
}

#[tokio::test]
async fn test_empty_export_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let destination = FilesystemDestination::new(FilesystemConfig::new(temp.path()));

    let err = CsvExporter::default()
        .export_reports(&[], &destination)
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::NoData));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}
