use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use super::action::Action;
use crate::data_provider::FeedSource;

/// Side effects returned by the reducer
pub enum Effect {
    None,
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    /// Load the feed through [`DataEffects`]; resolved by the runtime
    FetchFeed,
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Async(_) => write!(f, "Async(..)"),
            Self::FetchFeed => write!(f, "FetchFeed"),
        }
    }
}

/// Effect handler for feed loading
///
/// Each method returns an Effect that dispatches the matching *Loaded
/// action when complete.
pub struct DataEffects {
    source: Arc<dyn FeedSource>,
}

impl DataEffects {
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self { source }
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Read and normalize the whole feed
    pub fn fetch_feed(&self) -> Effect {
        let source = self.source.clone();
        Effect::Async(Box::pin(async move {
            debug!("FEED: fetching {}", source.describe());
            let result = source.fetch_records().await;
            Action::FeedLoaded(result.map_err(|e| e.to_string()))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_provider::StaticFeed;

    #[tokio::test]
    async fn test_fetch_feed_resolves_to_feed_loaded() {
        let effects = DataEffects::new(Arc::new(StaticFeed::sample()));

        let Effect::Async(future) = effects.fetch_feed() else {
            panic!("expected an async effect");
        };

        match future.await {
            Action::FeedLoaded(Ok(records)) => assert_eq!(records.len(), 8),
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_feed_error_is_stringified() {
        let effects = DataEffects::new(Arc::new(StaticFeed::failing("broken.csv", "no such file")));

        let Effect::Async(future) = effects.fetch_feed() else {
            panic!("expected an async effect");
        };

        match future.await {
            Action::FeedLoaded(Err(message)) => {
                assert!(message.contains("broken.csv"));
                assert!(message.contains("no such file"));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_describe() {
        let effects = DataEffects::new(Arc::new(StaticFeed::sample()));
        assert_eq!(effects.describe(), "sample roster");
    }
}
