use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::analytics::{ClickRecord, DurationWindow, GeoRecord};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no analytics found for link '{0}'")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed analytics payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Supplier of raw analytics for a link
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    /// Click counts per time bucket for the last `window`
    async fn clicks(&self, key: &str, window: DurationWindow) -> SourceResult<Vec<ClickRecord>>;

    /// Individual visits (with geo data) for the last `window`
    async fn visits(&self, key: &str, window: DurationWindow) -> SourceResult<Vec<GeoRecord>>;
}

/// Fetch clicks, falling back to an empty list when the source fails
pub async fn clicks_or_empty(
    source: &dyn AnalyticsSource,
    key: &str,
    window: DurationWindow,
) -> Vec<ClickRecord> {
    match source.clicks(key, window).await {
        Ok(records) => records,
        Err(e) => {
            warn!("Could not fetch clicks chart data for '{}': {}", key, e);
            Vec::new()
        }
    }
}

/// Fetch visits, falling back to an empty list when the source fails
pub async fn visits_or_empty(
    source: &dyn AnalyticsSource,
    key: &str,
    window: DurationWindow,
) -> Vec<GeoRecord> {
    match source.visits(key, window).await {
        Ok(records) => records,
        Err(e) => {
            warn!("Could not fetch geo chart data for '{}': {}", key, e);
            Vec::new()
        }
    }
}
