//! One-shot background load of the country list
//!
//! The fetch runs on its own tokio task and reports back over an unbounded
//! channel. The task is bound to a `CancellationToken` owned by the
//! `CountryLoader` handle: cancelling or dropping the handle stops the task
//! and nothing is delivered afterwards.

use super::traits::CountrySource;
use crate::state::FormEvent;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Outcome of a country load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryLoadEvent {
    Loaded(Vec<String>),
    Failed(String),
}

impl From<CountryLoadEvent> for FormEvent {
    fn from(event: CountryLoadEvent) -> Self {
        match event {
            CountryLoadEvent::Loaded(names) => FormEvent::CountriesLoaded(names),
            CountryLoadEvent::Failed(reason) => FormEvent::CountryLoadFailed(reason),
        }
    }
}

/// Handle to a running country load
pub struct CountryLoader {
    handle: JoinHandle<()>,
    cancel: CancellationToken,
}

impl CountryLoader {
    /// Start fetching on a new task. Must be called inside a tokio runtime.
    pub fn spawn(source: Arc<dyn CountrySource>, tx: UnboundedSender<CountryLoadEvent>) -> Self {
        let cancel = CancellationToken::new();
        let cancel_child = cancel.clone();
        let handle = tokio::spawn(async move {
            run_load(source, tx, cancel_child).await;
        });
        Self { handle, cancel }
    }

    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            debug!("Cancelling country load");
        }
        self.cancel.cancel();
    }
}

impl Drop for CountryLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_load(
    source: Arc<dyn CountrySource>,
    tx: UnboundedSender<CountryLoadEvent>,
    cancel: CancellationToken,
) {
    let result = tokio::select! {
        _ = cancel.cancelled() => {
            debug!("Country load cancelled before completion");
            return;
        }
        result = source.fetch_country_names() => result,
    };

    if cancel.is_cancelled() {
        debug!("Country load finished after cancellation, discarding result");
        return;
    }

    let event = match result {
        Ok(names) => {
            info!("Loaded {} countries", names.len());
            CountryLoadEvent::Loaded(names)
        }
        Err(e) => {
            error!("Error fetching country list: {e}");
            CountryLoadEvent::Failed(e.to_string())
        }
    };

    // The receiver is gone once the view is torn down
    if tx.send(event).is_err() {
        debug!("Country load result dropped, receiver closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::error::CountryError;
    use crate::countries::traits::MockCountrySource;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::sync::mpsc::unbounded_channel;

    /// A source that never answers
    struct PendingSource;

    #[async_trait]
    impl CountrySource for PendingSource {
        async fn fetch_country_names(&self) -> Result<Vec<String>, CountryError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_success_sends_names_in_order() {
        let mut mock = MockCountrySource::new();
        mock.expect_fetch_country_names()
            .times(1)
            .returning(|| Ok(vec!["Peru".to_string(), "Chad".to_string()]));

        let (tx, mut rx) = unbounded_channel();
        let _loader = CountryLoader::spawn(Arc::new(mock), tx);

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            CountryLoadEvent::Loaded(vec!["Peru".to_string(), "Chad".to_string()])
        );
    }

    #[tokio::test]
    async fn test_failure_sends_failed() {
        let mut mock = MockCountrySource::new();
        mock.expect_fetch_country_names()
            .times(1)
            .returning(|| Err(CountryError::Status(503)));

        let (tx, mut rx) = unbounded_channel();
        let _loader = CountryLoader::spawn(Arc::new(mock), tx);

        match rx.recv().await.unwrap() {
            CountryLoadEvent::Failed(reason) => assert!(reason.contains("503")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancel_sends_nothing() {
        let (tx, mut rx) = unbounded_channel();
        let loader = CountryLoader::spawn(Arc::new(PendingSource), tx);
        loader.cancel();

        // The task drops its sender on exit, closing the channel
        let received = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap();
        assert!(received.is_none());
    }

    #[tokio::test]
    async fn test_drop_cancels() {
        let (tx, mut rx) = unbounded_channel();
        let loader = CountryLoader::spawn(Arc::new(PendingSource), tx);
        drop(loader);

        let received = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap();
        assert!(received.is_none());
    }

    #[tokio::test]
    async fn test_closed_receiver_is_harmless() {
        let mut mock = MockCountrySource::new();
        mock.expect_fetch_country_names()
            .returning(|| Ok(vec!["Peru".to_string()]));

        let source = Arc::new(mock);
        let (tx, rx) = unbounded_channel();
        drop(rx);
        let _loader = CountryLoader::spawn(source.clone(), tx);

        // The task releases its handle on the source when it is done
        tokio::time::timeout(Duration::from_secs(5), async {
            while Arc::strong_count(&source) > 1 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
    }

    #[test]
    fn test_mock_source_blocking() {
        let mut mock = MockCountrySource::new();
        mock.expect_fetch_country_names()
            .returning(|| Ok(vec!["Chad".to_string()]));
        let names = tokio_test::block_on(mock.fetch_country_names()).unwrap();
        assert_eq!(names, vec!["Chad".to_string()]);
    }

    #[test]
    fn test_into_form_event() {
        assert_eq!(
            FormEvent::from(CountryLoadEvent::Loaded(vec!["Peru".into()])),
            FormEvent::CountriesLoaded(vec!["Peru".into()])
        );
        assert_eq!(
            FormEvent::from(CountryLoadEvent::Failed("x".into())),
            FormEvent::CountryLoadFailed("x".into())
        );
    }
}
