//! In-memory analytics source

use async_trait::async_trait;
use dashmap::DashMap;

use crate::analytics::{ClickRecord, DurationWindow, GeoRecord};
use crate::source::trait_def::{AnalyticsSource, SourceError, SourceResult};

#[derive(Debug, Clone, Default)]
struct LinkAnalytics {
    clicks: Vec<ClickRecord>,
    visits: Vec<GeoRecord>,
}

/// Analytics held in memory, keyed by link. Every window returns the same
/// records; the series filler applies the window.
#[derive(Debug, Default)]
pub struct MemorySource {
    links: DashMap<String, LinkAnalytics>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_clicks(&self, key: &str, clicks: Vec<ClickRecord>) {
        self.links.entry(key.to_string()).or_default().clicks = clicks;
    }

    pub fn insert_visits(&self, key: &str, visits: Vec<GeoRecord>) {
        self.links.entry(key.to_string()).or_default().visits = visits;
    }
}

#[async_trait]
impl AnalyticsSource for MemorySource {
    async fn clicks(&self, key: &str, _window: DurationWindow) -> SourceResult<Vec<ClickRecord>> {
        self.links
            .get(key)
            .map(|link| link.clicks.clone())
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }

    async fn visits(&self, key: &str, _window: DurationWindow) -> SourceResult<Vec<GeoRecord>> {
        self.links
            .get(key)
            .map(|link| link.visits.clone())
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{clicks_or_empty, visits_or_empty};

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let source = MemorySource::new();
        source.insert_clicks("k1", vec![ClickRecord::new("2024-01-01", "1")]);
        source.insert_visits("k1", vec![GeoRecord::with_country("NL")]);

        assert_eq!(source.clicks("k1", DurationWindow::Week).await.unwrap().len(), 1);
        assert_eq!(source.visits("k1", DurationWindow::Year).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_falls_back_to_empty() {
        let source = MemorySource::new();

        assert!(matches!(
            source.clicks("missing", DurationWindow::Week).await,
            Err(SourceError::NotFound(_))
        ));
        assert!(clicks_or_empty(&source, "missing", DurationWindow::Week).await.is_empty());
        assert!(visits_or_empty(&source, "missing", DurationWindow::Week).await.is_empty());
    }
}
