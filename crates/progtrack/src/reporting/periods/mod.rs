use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Granularity of a reporting period within a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    Quarter,
    Half,
    Yearly,
}

impl PeriodType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Quarter, Self::Half, Self::Yearly]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Quarter => "Quarter",
            Self::Half => "Half-Year",
            Self::Yearly => "Full Year",
        }
    }

    /// Number of periods of this type in one calendar year.
    pub const fn periods_per_year(self) -> u8 {
        match self {
            Self::Quarter => 4,
            Self::Half => 2,
            Self::Yearly => 1,
        }
    }
}

/// Identifies one reporting period, e.g. quarter 2 of 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSpec {
    pub period_type: PeriodType,
    pub period_number: u8,
    pub year: i32,
}

/// Inclusive start/end date pair. `start_date <= end_date` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, PeriodError> {
        if start_date > end_date {
            return Err(PeriodError::InvertedRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Closed-interval overlap: ranges sharing even a single day overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    #[error("{period_type:?} period number {period_number} has no standard range")]
    UnsupportedPeriod {
        period_type: PeriodType,
        period_number: u8,
    },
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("start date {start} falls after end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

const DEFAULT_MIN_YEAR: i32 = 2000;
const DEFAULT_MAX_YEAR: i32 = 2099;

/// Policy dial bounding the years a period may be created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodPolicy {
    min_year: i32,
    max_year: i32,
}

impl PeriodPolicy {
    pub fn new(min_year: i32, max_year: i32) -> Self {
        if min_year > max_year {
            return Self::default();
        }

        Self { min_year, max_year }
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn contains_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

impl Default for PeriodPolicy {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

/// Stateless calculator for standard reporting-period boundaries.
#[derive(Debug, Clone, Default)]
pub struct PeriodCalendar {
    policy: PeriodPolicy,
}

impl PeriodCalendar {
    pub fn with_policy(policy: PeriodPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PeriodPolicy {
        &self.policy
    }

    /// Computes the calendar-standard range for a period, e.g. quarter 2 of
    /// 2025 is April 1 through June 30.
    pub fn standard_range(&self, spec: PeriodSpec) -> Result<DateRange, PeriodError> {
        if !self.policy.contains_year(spec.year) {
            return Err(PeriodError::YearOutOfRange {
                year: spec.year,
                min: self.policy.min_year,
                max: self.policy.max_year,
            });
        }

        let ((start_month, start_day), (end_month, end_day)) =
            boundaries(spec.period_type, spec.period_number).ok_or(
                PeriodError::UnsupportedPeriod {
                    period_type: spec.period_type,
                    period_number: spec.period_number,
                },
            )?;

        Ok(DateRange {
            start_date: boundary(spec.year, start_month, start_day),
            end_date: boundary(spec.year, end_month, end_day),
        })
    }

    /// Whether `candidate` matches the standard range for `spec` exactly on
    /// both boundaries. Specs without a standard range compare as `false`,
    /// so the caller can always render a standard/custom badge.
    pub fn is_standard_range(&self, spec: PeriodSpec, candidate: &DateRange) -> bool {
        self.standard_range(spec)
            .map(|standard| standard == *candidate)
            .unwrap_or(false)
    }
}

fn boundaries(period_type: PeriodType, period_number: u8) -> Option<((u32, u32), (u32, u32))> {
    let pair = match (period_type, period_number) {
        (PeriodType::Quarter, 1) => ((1, 1), (3, 31)),
        (PeriodType::Quarter, 2) => ((4, 1), (6, 30)),
        (PeriodType::Quarter, 3) => ((7, 1), (9, 30)),
        (PeriodType::Quarter, 4) => ((10, 1), (12, 31)),
        (PeriodType::Half, 1) => ((1, 1), (6, 30)),
        (PeriodType::Half, 2) => ((7, 1), (12, 31)),
        (PeriodType::Yearly, 1) => ((1, 1), (12, 31)),
        _ => return None,
    };

    Some(pair)
}

fn boundary(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("boundary table holds valid dates")
}
