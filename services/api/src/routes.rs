use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use progtrack::error::AppError;
use progtrack::reporting::dashboard::views::{CompletionBuckets, RatingBreakdownEntry};
use progtrack::reporting::dashboard::DashboardReport;
use progtrack::reporting::import::StatusImporter;
use progtrack::reporting::periods::{DateRange, PeriodCalendar, PeriodSpec, PeriodType};
use progtrack::reporting::programs::{validation_router, ValidationPolicy};
use progtrack::reporting::ratings::RatingRecord;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct PeriodPreviewRequest {
    pub(crate) period_type: PeriodType,
    pub(crate) period_number: u8,
    pub(crate) year: i32,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) end_date: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) existing: Vec<DateRange>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PeriodPreviewResponse {
    pub(crate) period_type: PeriodType,
    pub(crate) period_number: u8,
    pub(crate) year: i32,
    pub(crate) standard: DateRange,
    pub(crate) effective: DateRange,
    pub(crate) uses_custom_dates: bool,
    pub(crate) overlapping: Vec<DateRange>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardStatsRequest {
    #[serde(default)]
    pub(crate) records: Vec<RatingRecord>,
    #[serde(default)]
    pub(crate) status_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardStatsResponse {
    pub(crate) data_source: StatsDataSource,
    pub(crate) total_programs: usize,
    pub(crate) ratings: Vec<RatingBreakdownEntry>,
    pub(crate) completion_buckets: CompletionBuckets,
    pub(crate) overall_progress_pct: u8,
    pub(crate) draft_programs: usize,
    pub(crate) average_completion_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum StatsDataSource {
    CsvImport,
    Inline,
}

pub(crate) fn with_reporting_routes(validation_policy: Arc<ValidationPolicy>) -> axum::Router {
    validation_router(validation_policy)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/periods/preview",
            axum::routing::post(period_preview_endpoint),
        )
        .route(
            "/api/v1/dashboard/stats",
            axum::routing::post(dashboard_stats_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn period_preview_endpoint(
    Extension(calendar): Extension<PeriodCalendar>,
    Json(payload): Json<PeriodPreviewRequest>,
) -> Result<Json<PeriodPreviewResponse>, AppError> {
    let PeriodPreviewRequest {
        period_type,
        period_number,
        year,
        start_date,
        end_date,
        existing,
    } = payload;

    let spec = PeriodSpec {
        period_type,
        period_number,
        year,
    };
    let standard = calendar.standard_range(spec)?;

    let effective = match (start_date, end_date) {
        (None, None) => standard,
        (start, end) => DateRange::new(
            start.unwrap_or(standard.start_date),
            end.unwrap_or(standard.end_date),
        )?,
    };

    let uses_custom_dates = !calendar.is_standard_range(spec, &effective);
    let overlapping = existing
        .into_iter()
        .filter(|range| range.overlaps(&effective))
        .collect();

    Ok(Json(PeriodPreviewResponse {
        period_type,
        period_number,
        year,
        standard,
        effective,
        uses_custom_dates,
        overlapping,
    }))
}

pub(crate) async fn dashboard_stats_endpoint(
    Json(payload): Json<DashboardStatsRequest>,
) -> Result<Json<DashboardStatsResponse>, AppError> {
    let DashboardStatsRequest {
        records,
        status_csv,
    } = payload;

    let (records, data_source) = if let Some(csv) = status_csv {
        let reader = Cursor::new(csv.into_bytes());
        let imported = StatusImporter::from_reader(reader)?;
        (imported, StatsDataSource::CsvImport)
    } else {
        (records, StatsDataSource::Inline)
    };

    let summary = DashboardReport::from_records(&records).summary();

    Ok(Json(DashboardStatsResponse {
        data_source,
        total_programs: summary.total_programs,
        ratings: summary.ratings,
        completion_buckets: summary.completion_buckets,
        overall_progress_pct: summary.overall_progress_pct,
        draft_programs: summary.draft_programs,
        average_completion_pct: summary.average_completion_pct,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use progtrack::reporting::ratings::RatingKey;

    #[tokio::test]
    async fn period_preview_flags_custom_dates_and_overlaps() {
        let existing = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
            NaiveDate::from_ymd_opt(2025, 4, 15).expect("valid date"),
        )
        .expect("valid range");
        let request = PeriodPreviewRequest {
            period_type: PeriodType::Quarter,
            period_number: 2,
            year: 2025,
            start_date: Some(NaiveDate::from_ymd_opt(2025, 4, 10).expect("valid date")),
            end_date: None,
            existing: vec![existing],
        };

        let Json(body) = period_preview_endpoint(
            Extension(PeriodCalendar::default()),
            Json(request),
        )
        .await
        .expect("preview builds");

        assert_eq!(
            body.standard.start_date,
            NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date")
        );
        assert_eq!(
            body.effective.start_date,
            NaiveDate::from_ymd_opt(2025, 4, 10).expect("valid date")
        );
        assert!(body.uses_custom_dates);
        assert_eq!(body.overlapping.len(), 1);
    }

    #[tokio::test]
    async fn period_preview_defaults_to_the_standard_range() {
        let request = PeriodPreviewRequest {
            period_type: PeriodType::Half,
            period_number: 2,
            year: 2025,
            start_date: None,
            end_date: None,
            existing: Vec::new(),
        };

        let Json(body) = period_preview_endpoint(
            Extension(PeriodCalendar::default()),
            Json(request),
        )
        .await
        .expect("preview builds");

        assert!(!body.uses_custom_dates);
        assert_eq!(body.standard, body.effective);
        assert!(body.overlapping.is_empty());
    }

    #[tokio::test]
    async fn period_preview_rejects_unknown_period_numbers() {
        let request = PeriodPreviewRequest {
            period_type: PeriodType::Quarter,
            period_number: 5,
            year: 2025,
            start_date: None,
            end_date: None,
            existing: Vec::new(),
        };

        let error = period_preview_endpoint(
            Extension(PeriodCalendar::default()),
            Json(request),
        )
        .await
        .expect_err("quarter 5 rejected");
        assert!(matches!(error, AppError::Period(_)));
    }

    #[tokio::test]
    async fn dashboard_stats_accepts_inline_records() {
        let request = DashboardStatsRequest {
            records: vec![
                RatingRecord {
                    raw_status: Some("completed".to_string()),
                    is_draft: false,
                    completion_percentage: 100.0,
                },
                RatingRecord {
                    raw_status: Some("delayed".to_string()),
                    is_draft: false,
                    completion_percentage: 40.0,
                },
            ],
            status_csv: None,
        };

        let Json(body) = dashboard_stats_endpoint(Json(request))
            .await
            .expect("stats build");

        assert_eq!(body.data_source, StatsDataSource::Inline);
        assert_eq!(body.total_programs, 2);
        assert_eq!(body.overall_progress_pct, 50);
        assert_eq!(body.ratings.len(), 7);
    }

    #[tokio::test]
    async fn dashboard_stats_prefers_the_csv_payload() {
        let request = DashboardStatsRequest {
            records: Vec::new(),
            status_csv: Some(
                "Program,Status,Draft,Completion %\nRural Broadband,on-track,no,45\n".to_string(),
            ),
        };

        let Json(body) = dashboard_stats_endpoint(Json(request))
            .await
            .expect("stats build");

        assert_eq!(body.data_source, StatsDataSource::CsvImport);
        assert_eq!(body.total_programs, 1);
        let on_track = body
            .ratings
            .iter()
            .find(|entry| entry.rating == RatingKey::OnTrack)
            .expect("on-track entry");
        assert_eq!(on_track.count, 1);
    }
}
