use crate::infra::default_validation_policy;
use chrono::{Datelike, Local};
use clap::Args;
use progtrack::error::AppError;
use progtrack::reporting::dashboard::views::DashboardSummary;
use progtrack::reporting::dashboard::DashboardReport;
use progtrack::reporting::import::StatusImporter;
use progtrack::reporting::periods::{PeriodCalendar, PeriodSpec, PeriodType};
use progtrack::reporting::programs::{validate_program_number, FieldValidation};
use progtrack::reporting::ratings::RatingRecord;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct StatsArgs {
    /// Status export CSV to aggregate
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Emit the summary as pretty-printed JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_dashboard_stats(args: StatsArgs) -> Result<(), AppError> {
    let records = StatusImporter::from_path(&args.csv)?;
    let summary = DashboardReport::from_records(&records).summary();

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("summary unavailable: {err}"),
        }
        return Ok(());
    }

    render_dashboard_summary(&summary);
    Ok(())
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Calendar year for the period walkthrough (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let year = args.year.unwrap_or_else(|| Local::now().year());
    let calendar = PeriodCalendar::default();

    println!("Reporting periods for {year}");
    for period_type in PeriodType::ordered() {
        for number in 1..=period_type.periods_per_year() {
            let range = calendar.standard_range(PeriodSpec {
                period_type,
                period_number: number,
                year,
            })?;
            println!(
                "- {} {}: {} -> {}",
                period_type.label(),
                number,
                range.start_date,
                range.end_date
            );
        }
    }

    println!("\nProgram number validation samples (initiative prefix 1.1)");
    let policy = default_validation_policy();
    for candidate in ["1.1.A", "2.1.A", "1.1.", "1.1 A"] {
        let outcome = FieldValidation::from_result(validate_program_number(
            Some(candidate),
            Some("1.1"),
            &policy,
        ));
        if outcome.valid {
            println!("- {candidate}: accepted");
        } else {
            println!("- {candidate}: {}", outcome.message);
        }
    }

    println!("\nDashboard statistics from sample records");
    let records = sample_records();
    let summary = DashboardReport::from_records(&records).summary();
    render_dashboard_summary(&summary);

    Ok(())
}

fn sample_records() -> Vec<RatingRecord> {
    let statuses = [
        ("completed", false, 100.0),
        ("completed", false, 100.0),
        ("on-track", false, 60.0),
        ("target-achieved", false, 75.0),
        ("delayed", false, 30.0),
        ("severe-delay", true, 10.0),
        ("not-started", false, 0.0),
    ];

    statuses
        .into_iter()
        .map(|(status, is_draft, completion)| RatingRecord {
            raw_status: Some(status.to_string()),
            is_draft,
            completion_percentage: completion,
        })
        .collect()
}

pub(crate) fn render_dashboard_summary(summary: &DashboardSummary) {
    println!(
        "Programs reporting: {} ({} drafts)",
        summary.total_programs, summary.draft_programs
    );
    println!(
        "Overall progress: {}% completed | {:.1}% average completion",
        summary.overall_progress_pct, summary.average_completion_pct
    );

    println!("\nHeadline tiles");
    println!("- Completed: {}", summary.completion_buckets.completed);
    println!("- On track: {}", summary.completion_buckets.on_track);
    println!("- Delayed: {}", summary.completion_buckets.delayed);

    println!("\nRating breakdown");
    for entry in &summary.ratings {
        println!(
            "- {} [{}]: {}",
            entry.rating_label,
            entry.severity_class.as_str(),
            entry.count
        );
    }
}
