//! Analytics source backed by JSON exports on disk
//!
//! Layout: `<root>/<key>/clicks.json` holds the click counts (a bare array or
//! the backend's `{ "clicksOverTime": [...] }` body) and
//! `<root>/<key>/data.json` holds the visit list.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::analytics::{ClickRecord, DurationWindow, GeoRecord};
use crate::source::trait_def::{AnalyticsSource, SourceError, SourceResult};

const CLICKS_FILE: &str = "clicks.json";
const VISITS_FILE: &str = "data.json";

#[derive(Deserialize)]
#[serde(untagged)]
enum ClicksPayload {
    Wrapped {
        #[serde(rename = "clicksOverTime")]
        clicks_over_time: Vec<ClickRecord>,
    },
    Bare(Vec<ClickRecord>),
}

impl From<ClicksPayload> for Vec<ClickRecord> {
    fn from(payload: ClicksPayload) -> Self {
        match payload {
            ClicksPayload::Wrapped { clicks_over_time } => clicks_over_time,
            ClicksPayload::Bare(records) => records,
        }
    }
}

pub struct JsonFileSource {
    root: PathBuf,
}

impl JsonFileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `file` for `key`; keys that could escape the root are unknown
    fn path_for(&self, key: &str, file: &str) -> SourceResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(SourceError::NotFound(key.to_string()));
        }

        Ok(self.root.join(key).join(file))
    }

    async fn read<T: DeserializeOwned>(&self, key: &str, file: &str) -> SourceResult<T> {
        let path = self.path_for(key, file)?;
        debug!("Reading analytics from {}", path.display());

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound(key.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl AnalyticsSource for JsonFileSource {
    async fn clicks(&self, key: &str, _window: DurationWindow) -> SourceResult<Vec<ClickRecord>> {
        let payload: ClicksPayload = self.read(key, CLICKS_FILE).await?;
        Ok(payload.into())
    }

    async fn visits(&self, key: &str, _window: DurationWindow) -> SourceResult<Vec<GeoRecord>> {
        self.read(key, VISITS_FILE).await
    }
}
