/// Trait for providing roster feeds, abstracting over files on disk and in-memory data
use std::path::PathBuf;

use async_trait::async_trait;

use crate::engine::Record;
use crate::feed::{self, FeedError};

/// Source of normalized roster records, implemented by [`FileFeed`] and [`StaticFeed`]
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Short human readable description (path or label) for status messages
    fn describe(&self) -> String;

    /// Read and normalize the whole feed
    async fn fetch_records(&self) -> Result<Vec<Record>, FeedError>;
}

/// CSV feed read from disk
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_records(&self) -> Result<Vec<Record>, FeedError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.path.clone(),
                source,
            })?;
        feed::parse_records(bytes.as_slice())
    }
}

/// In-memory CSV feed for tests
#[derive(Debug, Clone)]
pub struct StaticFeed {
    label: String,
    content: Result<String, String>,
}

impl StaticFeed {
    pub fn new(label: impl Into<String>, csv: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: Ok(csv.into()),
        }
    }

    /// A feed whose every fetch fails with an I/O error carrying `message`
    pub fn failing(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: Err(message.into()),
        }
    }

    /// The fixture roster
    pub fn sample() -> Self {
        Self::new("sample roster", crate::fixtures::sample_feed_csv())
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    fn describe(&self) -> String {
        self.label.clone()
    }

    async fn fetch_records(&self) -> Result<Vec<Record>, FeedError> {
        match &self.content {
            Ok(csv) => feed::parse_records(csv.as_bytes()),
            Err(message) => Err(FeedError::Io {
                path: PathBuf::from(&self.label),
                source: std::io::Error::new(std::io::ErrorKind::Other, message.clone()),
            }),
        }
    }
}
