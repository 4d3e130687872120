use crate::reporting::ratings::{RatingKey, SeverityClass};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RatingBreakdownEntry {
    pub rating: RatingKey,
    pub rating_label: &'static str,
    pub severity_class: SeverityClass,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompletionBuckets {
    pub completed: usize,
    pub on_track: usize,
    pub delayed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_programs: usize,
    pub ratings: Vec<RatingBreakdownEntry>,
    pub completion_buckets: CompletionBuckets,
    pub overall_progress_pct: u8,
    pub draft_programs: usize,
    pub average_completion_pct: f64,
}
