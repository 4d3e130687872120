use super::views::{CompletionBuckets, DashboardSummary, RatingBreakdownEntry};
use crate::reporting::ratings::{RatingKey, RatingRecord};
use std::collections::HashMap;

/// Aggregated program counts for one reporting period, folded from the
/// record set the caller read out of storage. Nothing is cached between
/// calls; the fold is recomputed from whatever records arrive.
#[derive(Debug, Default)]
pub struct DashboardReport {
    counts: HashMap<RatingKey, usize>,
    total_programs: usize,
    draft_programs: usize,
    completion_total: f64,
}

impl DashboardReport {
    pub fn from_records(records: &[RatingRecord]) -> Self {
        let mut counts = HashMap::new();
        let mut draft_programs = 0;
        let mut completion_total = 0.0;

        for record in records {
            *counts.entry(record.rating()).or_insert(0) += 1;
            if record.is_draft {
                draft_programs += 1;
            }
            completion_total += record.completion_percentage;
        }

        Self {
            counts,
            total_programs: records.len(),
            draft_programs,
            completion_total,
        }
    }

    pub fn total_programs(&self) -> usize {
        self.total_programs
    }

    pub fn draft_programs(&self) -> usize {
        self.draft_programs
    }

    pub fn count_for(&self, rating: RatingKey) -> usize {
        self.counts.get(&rating).copied().unwrap_or(0)
    }

    /// Completed, on-track, and delayed headline tiles. `NotStarted`
    /// programs count toward the total only.
    pub fn completion_buckets(&self) -> CompletionBuckets {
        CompletionBuckets {
            completed: self.count_for(RatingKey::Completed),
            on_track: self.count_for(RatingKey::OnTrack)
                + self.count_for(RatingKey::OnTrackYearly)
                + self.count_for(RatingKey::TargetAchieved),
            delayed: self.count_for(RatingKey::Delayed) + self.count_for(RatingKey::SevereDelay),
        }
    }

    /// Share of programs in the completed bucket, rounded to the nearest
    /// whole percent. Empty record sets read as zero.
    pub fn overall_progress_pct(&self) -> u8 {
        if self.total_programs == 0 {
            return 0;
        }

        let completed = self.count_for(RatingKey::Completed) as f64;
        ((100.0 * completed) / self.total_programs as f64).round() as u8
    }

    /// Mean reported completion percentage across all records, to one
    /// decimal place.
    pub fn average_completion_pct(&self) -> f64 {
        if self.total_programs == 0 {
            return 0.0;
        }

        let mean = self.completion_total / self.total_programs as f64;
        (mean * 10.0).round() / 10.0
    }

    pub fn summary(&self) -> DashboardSummary {
        let ratings = RatingKey::ordered()
            .into_iter()
            .map(|rating| RatingBreakdownEntry {
                rating,
                rating_label: rating.label(),
                severity_class: rating.severity(),
                count: self.count_for(rating),
            })
            .collect();

        DashboardSummary {
            total_programs: self.total_programs,
            ratings,
            completion_buckets: self.completion_buckets(),
            overall_progress_pct: self.overall_progress_pct(),
            draft_programs: self.draft_programs,
            average_completion_pct: self.average_completion_pct(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: &str) -> RatingRecord {
        RatingRecord {
            raw_status: Some(status.to_string()),
            is_draft: false,
            completion_percentage: 0.0,
        }
    }

    #[test]
    fn buckets_partition_the_actionable_ratings() {
        let records = vec![
            record("completed"),
            record("delayed"),
            record("not-started"),
        ];
        let report = DashboardReport::from_records(&records);
        let buckets = report.completion_buckets();
        assert_eq!(report.total_programs(), 3);
        assert_eq!(buckets.completed, 1);
        assert_eq!(buckets.on_track, 0);
        assert_eq!(buckets.delayed, 1);
        assert_eq!(report.overall_progress_pct(), 33);
    }

    #[test]
    fn summary_lists_all_seven_ratings_even_when_zero() {
        let report = DashboardReport::from_records(&[record("on-track")]);
        let summary = report.summary();
        assert_eq!(summary.ratings.len(), 7);
        let zeroes = summary
            .ratings
            .iter()
            .filter(|entry| entry.count == 0)
            .count();
        assert_eq!(zeroes, 6);
    }

    #[test]
    fn counts_by_rating_sum_to_the_total() {
        let records = vec![
            record("on-track"),
            record("on-track-yearly"),
            record("target-achieved"),
            record("severe-delay"),
            record("nonsense"),
        ];
        let report = DashboardReport::from_records(&records);
        let counted: usize = RatingKey::ordered()
            .into_iter()
            .map(|rating| report.count_for(rating))
            .sum();
        assert_eq!(counted, report.total_programs());
    }

    #[test]
    fn empty_record_sets_read_as_zero_progress() {
        let report = DashboardReport::from_records(&[]);
        assert_eq!(report.total_programs(), 0);
        assert_eq!(report.overall_progress_pct(), 0);
        assert_eq!(report.average_completion_pct(), 0.0);
    }

    #[test]
    fn progress_rounds_half_away_from_zero() {
        let records = vec![record("completed"), record("delayed")];
        let report = DashboardReport::from_records(&records);
        assert_eq!(report.overall_progress_pct(), 50);

        let records: Vec<_> = std::iter::once(record("completed"))
            .chain(std::iter::repeat_with(|| record("delayed")).take(7))
            .collect();
        let report = DashboardReport::from_records(&records);
        assert_eq!(report.overall_progress_pct(), 13);
    }

    #[test]
    fn drafts_and_completion_feed_the_supplemental_tiles() {
        let records = vec![
            RatingRecord {
                raw_status: Some("on-track".to_string()),
                is_draft: true,
                completion_percentage: 40.0,
            },
            RatingRecord {
                raw_status: Some("completed".to_string()),
                is_draft: false,
                completion_percentage: 100.0,
            },
            RatingRecord {
                raw_status: None,
                is_draft: false,
                completion_percentage: 25.5,
            },
        ];
        let report = DashboardReport::from_records(&records);
        assert_eq!(report.draft_programs(), 1);
        assert_eq!(report.average_completion_pct(), 55.2);
    }
}
