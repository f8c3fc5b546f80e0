//! Reporting windows selectable on the dashboard

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("unsupported duration window: {0} days (expected one of 1, 7, 30, 365)")]
    InvalidWindow(u32),
}

/// Size of one time bucket in a filled series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Hour,
    Day,
}

/// Reporting horizon, identified on the wire by its `days` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DurationWindow {
    /// Last 24 hours, hourly buckets
    Day,
    /// Last 7 days
    #[default]
    Week,
    /// Last 30 days
    Month,
    /// Last 365 days
    Year,
}

impl DurationWindow {
    pub const ALL: [DurationWindow; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Value of the `days` query parameter
    pub const fn days(self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    pub const fn granularity(self) -> Granularity {
        match self {
            Self::Day => Granularity::Hour,
            _ => Granularity::Day,
        }
    }

    /// Number of buckets a filled series has for this window
    pub const fn bucket_count(self) -> usize {
        match self {
            Self::Day => 24,
            other => other.days() as usize,
        }
    }

    /// Human readable span, as in "Clicks for the last 7 days"
    pub const fn description(self) -> &'static str {
        match self {
            Self::Day => "24 hours",
            Self::Week => "7 days",
            Self::Month => "30 days",
            Self::Year => "year",
        }
    }
}

impl TryFrom<u32> for DurationWindow {
    type Error = ChartError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            1 => Ok(Self::Day),
            7 => Ok(Self::Week),
            30 => Ok(Self::Month),
            365 => Ok(Self::Year),
            other => Err(ChartError::InvalidWindow(other)),
        }
    }
}

impl From<DurationWindow> for u32 {
    fn from(window: DurationWindow) -> Self {
        window.days()
    }
}

impl std::str::FromStr for DurationWindow {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s.trim().parse::<u32>()?;
        Ok(Self::try_from(days)?)
    }
}

impl std::fmt::Display for DurationWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_days() {
        for window in DurationWindow::ALL {
            assert_eq!(DurationWindow::try_from(window.days()), Ok(window));
        }
        assert_eq!(
            DurationWindow::try_from(14),
            Err(ChartError::InvalidWindow(14))
        );
        assert_eq!(
            DurationWindow::try_from(0),
            Err(ChartError::InvalidWindow(0))
        );
    }

    #[test]
    fn test_bucket_counts() {
        let counts: Vec<usize> = DurationWindow::ALL
            .iter()
            .map(|w| w.bucket_count())
            .collect();
        assert_eq!(counts, vec![24, 7, 30, 365]);
        assert_eq!(DurationWindow::Day.granularity(), Granularity::Hour);
        assert_eq!(DurationWindow::Year.granularity(), Granularity::Day);
    }

    #[test]
    fn test_parse_and_serde() {
        assert_eq!("30".parse::<DurationWindow>().unwrap(), DurationWindow::Month);
        assert!("31".parse::<DurationWindow>().is_err());
        assert!("week".parse::<DurationWindow>().is_err());

        assert_eq!(serde_json::to_string(&DurationWindow::Year).unwrap(), "365");
        let window: DurationWindow = serde_json::from_str("1").unwrap();
        assert_eq!(window, DurationWindow::Day);
        assert!(serde_json::from_str::<DurationWindow>("999").is_err());
    }

    #[test]
    fn test_default_is_week() {
        assert_eq!(DurationWindow::default(), DurationWindow::Week);
        assert_eq!(DurationWindow::Week.description(), "7 days");
    }
}
