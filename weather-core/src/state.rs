//! View state shared with the display layer.
//!
//! [`WeatherController`] is the only writer. Each lookup is tagged with a
//! [`RequestId`] when it starts and its result is applied only if no newer
//! lookup has started since, so a slow response can never overwrite the
//! result of a request issued after it. In-flight requests are not
//! cancelled; their results are dropped on arrival.

use std::sync::Arc;

use tokio::{sync::watch, task::JoinHandle};
use tracing::debug;

use crate::{FetchError, WeatherProvider, WeatherReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// What the display layer renders. A report and an error are never set together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherState {
    report: Option<WeatherReport>,
    error: Option<String>,
    loading: bool,
    latest: u64,
}

impl WeatherState {
    pub fn report(&self) -> Option<&WeatherReport> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a lookup. Any previous error is cleared; a previous report stays
    /// visible until the result arrives.
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        RequestId(self.latest)
    }

    /// Apply the result of lookup `id`. Returns `false` when a newer lookup
    /// has started since, in which case nothing changes.
    pub fn complete(&mut self, id: RequestId, result: Result<WeatherReport, FetchError>) -> bool {
        if id.0 != self.latest {
            return false;
        }

        self.loading = false;
        match result {
            Ok(report) => {
                self.report = Some(report);
                self.error = None;
            }
            Err(err) => {
                self.report = None;
                self.error = Some(err.user_message());
            }
        }
        true
    }
}

/// Owns the [`WeatherState`] and runs lookups against a provider.
#[derive(Debug, Clone)]
pub struct WeatherController {
    provider: Arc<dyn WeatherProvider>,
    state: Arc<watch::Sender<WeatherState>>,
}

impl WeatherController {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        let (tx, _rx) = watch::channel(WeatherState::default());
        Self {
            provider,
            state: Arc::new(tx),
        }
    }

    /// Read-only handle for the display layer.
    pub fn subscribe(&self) -> watch::Receiver<WeatherState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> WeatherState {
        self.state.borrow().clone()
    }

    /// Run a lookup to completion. Returns whether its result was applied.
    pub async fn fetch(&self, city: &str) -> bool {
        let id = self.begin();
        self.run(id, city).await
    }

    /// Start a lookup on the runtime and return immediately.
    ///
    /// The request id is taken before spawning, so issue order is call order.
    pub fn submit(&self, city: impl Into<String>) -> JoinHandle<bool> {
        let id = self.begin();
        let city = city.into();
        let this = self.clone();
        tokio::spawn(async move { this.run(id, &city).await })
    }

    fn begin(&self) -> RequestId {
        let mut id = RequestId(0);
        self.state.send_modify(|state| id = state.begin());
        id
    }

    async fn run(&self, id: RequestId, city: &str) -> bool {
        let result = self.provider.fetch_city(city).await;
        let applied = self
            .state
            .send_if_modified(|state| state.complete(id, result));

        if !applied {
            debug!(request = id.0, city, "dropping response superseded by a newer request");
        }
        applied
    }
}
