//! Gap-filled click time series
//!
//! Buckets are aligned in UTC. The newest bucket starts at "now" truncated
//! to the bucket unit (hour for the 24 hour window, day otherwise), so the
//! current partial bucket is always part of the series. Older buckets step
//! back one unit at a time until the window's bucket count is reached.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use std::collections::HashMap;
use tracing::debug;

use crate::analytics::models::{ClickRecord, TimeSeriesPoint};
use crate::analytics::window::{DurationWindow, Granularity};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const OFFSET_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%#z";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fill the click series for `window`, ending at the current UTC time
pub fn fill(records: &[ClickRecord], window: DurationWindow) -> Vec<TimeSeriesPoint> {
    fill_at(records, window, Utc::now())
}

/// Fill the click series for `window`, ending at `now`
///
/// Every bucket of the window appears exactly once, in ascending order.
/// Records whose timestamp cannot be parsed, or that fall outside the
/// window, do not contribute to any bucket.
pub fn fill_at(
    records: &[ClickRecord],
    window: DurationWindow,
    now: DateTime<Utc>,
) -> Vec<TimeSeriesPoint> {
    let granularity = window.granularity();
    let buckets = bucket_starts(window, now);

    let index: HashMap<DateTime<Utc>, usize> = buckets
        .iter()
        .enumerate()
        .map(|(i, start)| (*start, i))
        .collect();
    let mut counts = vec![0u64; buckets.len()];

    for record in records {
        let Some(timestamp) = parse_timestamp(&record.day) else {
            debug!("Skipping click record with malformed timestamp: {:?}", record.day);
            continue;
        };

        if let Some(&i) = index.get(&truncate(timestamp, granularity)) {
            counts[i] = counts[i].saturating_add(record.parsed_count());
        }
    }

    buckets
        .into_iter()
        .zip(counts)
        .map(|(x, y)| TimeSeriesPoint { x, y })
        .collect()
}

/// Ascending bucket start times for `window`, ending with the bucket that
/// contains `now`
pub fn bucket_starts(window: DurationWindow, now: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let granularity = window.granularity();
    let newest = truncate(now, granularity);
    let step = unit(granularity);
    let count = window.bucket_count() as i32;

    (0..count)
        .rev()
        .map(|back| newest - step * back)
        .collect()
}

/// Truncate a timestamp to the start of its bucket
pub fn truncate(timestamp: DateTime<Utc>, granularity: Granularity) -> DateTime<Utc> {
    let midnight = timestamp.date_naive().and_time(NaiveTime::MIN).and_utc();

    match granularity {
        Granularity::Day => midnight,
        Granularity::Hour => midnight + TimeDelta::hours(i64::from(timestamp.hour())),
    }
}

fn unit(granularity: Granularity) -> TimeDelta {
    match granularity {
        Granularity::Hour => TimeDelta::hours(1),
        Granularity::Day => TimeDelta::days(1),
    }
}

/// Parse a record timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.f][+offset]`, the same without an
/// offset (read as UTC), and a bare `YYYY-MM-DD` (UTC midnight).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Ok(ts) = DateTime::parse_from_str(raw, OFFSET_DATETIME_FORMAT) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
