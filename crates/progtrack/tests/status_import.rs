use progtrack::reporting::dashboard::DashboardReport;
use progtrack::reporting::import::{StatusImportError, StatusImporter};
use std::io::Cursor;

#[test]
fn export_flows_from_csv_to_dashboard_summary() {
    let csv = "Program,Status,Draft,Completion %\n\
Rural Broadband,completed,no,100\n\
School Meals,delayed,no,35%\n\
Digital ID,,yes,\n";
    let records = StatusImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
    let summary = DashboardReport::from_records(&records).summary();

    assert_eq!(summary.total_programs, 3);
    assert_eq!(summary.completion_buckets.completed, 1);
    assert_eq!(summary.completion_buckets.delayed, 1);
    assert_eq!(summary.overall_progress_pct, 33);
    assert_eq!(summary.draft_programs, 1);
    assert_eq!(summary.average_completion_pct, 45.0);
}

#[test]
fn unknown_statuses_degrade_instead_of_failing() {
    let csv = "Program,Status,Draft,Completion %\n\
Legacy Program,ACTIVE (migrated),no,80\n";
    let records = StatusImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
    let summary = DashboardReport::from_records(&records).summary();
    assert_eq!(summary.total_programs, 1);
    assert_eq!(summary.completion_buckets.completed, 0);
    assert_eq!(summary.completion_buckets.on_track, 0);
    assert_eq!(summary.completion_buckets.delayed, 0);
}

#[test]
fn ragged_rows_surface_a_csv_error() {
    let csv = "Program,Status,Draft,Completion %\nRural Broadband,on-track\n";
    let error = StatusImporter::from_reader(Cursor::new(csv)).expect_err("ragged row rejected");
    assert!(matches!(error, StatusImportError::Csv(_)));
    assert!(error.to_string().contains("invalid status CSV data"));
}

#[test]
fn headers_are_matched_after_trimming() {
    let csv = "Program , Status , Draft , Completion %\nWater Access,on-track,no,55\n";
    let records = StatusImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].completion_percentage, 55.0);
}
