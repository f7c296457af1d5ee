//! Aggregation engine: pure transforms over defect and project collections.
//!
//! [`summarize`] backs the `GET /analytics` endpoint; [`project_completion`]
//! and [`creation_series`] reproduce the derived views the browser client
//! computes from already-fetched collections. Keeping all three here gives
//! the rounding and bucketing rules a single home, so any future consumer
//! stays compatible with the client's rendering.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::entities::{Defect, Project};
use crate::enums::DefectStatus;

/// Number of day buckets retained by [`creation_series`].
const SERIES_BUCKETS: usize = 30;

/// One-pass summary over the full defect collection.
///
/// `status_count` and `priority_count` contain only labels that occur, and
/// each map's counts sum to `total_defects`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DefectSummary {
    pub total_defects: u64,
    pub overdue: u64,
    pub status_count: BTreeMap<String, u64>,
    pub priority_count: BTreeMap<String, u64>,
}

/// Completion rate of one project, over defects referencing it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCompletion {
    pub project_id: String,
    pub name: String,
    /// `round(100 × closed / total)`, nearest integer percent.
    pub percent: u8,
}

/// Defect-creation count for one calendar day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayBucket {
    pub day: NaiveDate,
    pub count: u64,
}

/// A defect is overdue iff it has a due date strictly in the past and its
/// status is not `Closed`. "Past" is wall-clock time supplied by the caller,
/// evaluated once per request.
#[must_use]
pub fn is_overdue(defect: &Defect, now: DateTime<Utc>) -> bool {
    defect
        .due_date
        .is_some_and(|due| due < now && defect.status != DefectStatus::Closed)
}

/// Compute the analytics summary in a single pass over all defects.
#[must_use]
pub fn summarize(defects: &[Defect], now: DateTime<Utc>) -> DefectSummary {
    let mut status_count: BTreeMap<String, u64> = BTreeMap::new();
    let mut priority_count: BTreeMap<String, u64> = BTreeMap::new();
    let mut overdue = 0;

    for defect in defects {
        *status_count
            .entry(defect.status.as_str().to_string())
            .or_insert(0) += 1;
        *priority_count
            .entry(defect.priority.as_str().to_string())
            .or_insert(0) += 1;
        if is_overdue(defect, now) {
            overdue += 1;
        }
    }

    DefectSummary {
        total_defects: defects.len() as u64,
        overdue,
        status_count,
        priority_count,
    }
}

/// Per-project completion rate: closed defects over all defects whose
/// `project_id` matches, as a nearest-integer percent.
///
/// Projects with zero defects are omitted, preserving the order of the
/// remaining projects as given.
#[must_use]
pub fn project_completion(projects: &[Project], defects: &[Defect]) -> Vec<ProjectCompletion> {
    projects
        .iter()
        .filter_map(|project| {
            let mut total = 0u64;
            let mut closed = 0u64;
            for defect in defects.iter().filter(|d| d.project_id == project.id) {
                total += 1;
                if defect.status == DefectStatus::Closed {
                    closed += 1;
                }
            }
            if total == 0 {
                return None;
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            #[allow(clippy::cast_sign_loss)]
            let percent = (closed as f64 / total as f64 * 100.0).round() as u8;
            Some(ProjectCompletion {
                project_id: project.id.clone(),
                name: project.name.clone(),
                percent,
            })
        })
        .collect()
}

/// Daily defect-creation counts bucketed by calendar day, truncated to the
/// most recent 30 buckets, in chronological order.
///
/// Days with no creations produce no bucket. Bucketing uses the UTC calendar
/// day of `created_at`; a caller wanting local-zone buckets converts the
/// timestamps before calling.
#[must_use]
pub fn creation_series(defects: &[Defect]) -> Vec<DayBucket> {
    let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for defect in defects {
        *by_day.entry(defect.created_at.date_naive()).or_insert(0) += 1;
    }

    let mut series: Vec<DayBucket> = by_day
        .into_iter()
        .map(|(day, count)| DayBucket { day, count })
        .collect();
    if series.len() > SERIES_BUCKETS {
        series.drain(..series.len() - SERIES_BUCKETS);
    }
    series
}
