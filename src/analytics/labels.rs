//! Axis label formatting for click charts

use chrono::{DateTime, Utc};

use crate::analytics::window::{ChartError, DurationWindow};

const HOUR_PATTERN: &str = "%H:%M";
const DAY_PATTERN: &str = "%d %b";
const MONTH_PATTERN: &str = "%b %Y";

/// Formats bucket timestamps for the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelFormatter {
    pattern: &'static str,
}

impl LabelFormatter {
    pub const fn for_window(window: DurationWindow) -> Self {
        let pattern = match window {
            DurationWindow::Day => HOUR_PATTERN,
            DurationWindow::Week | DurationWindow::Month => DAY_PATTERN,
            DurationWindow::Year => MONTH_PATTERN,
        };
        Self { pattern }
    }

    /// strftime pattern used for labels
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn format(&self, timestamp: DateTime<Utc>) -> String {
        timestamp.format(self.pattern).to_string()
    }
}

/// Label formatter for a raw `days` value
///
/// Fails with [`ChartError::InvalidWindow`] unless `days` is one of the
/// dashboard windows.
pub fn formatter_for(days: u32) -> Result<LabelFormatter, ChartError> {
    DurationWindow::try_from(days).map(LabelFormatter::for_window)
}
