//! Data sources feeding the list views.
//!
//! A source completes exactly once with an ordered `Vec` of rows. Failures
//! never escape: they are logged and the source completes with no rows.

use std::fmt::Debug;
use std::sync::Arc;

use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

use crate::fetch_service::FetchService;
use crate::records::MpsEntry;

/// Completion callback receiving the loaded rows.
pub type OnRows<T> = Box<dyn FnOnce(Vec<T>) + Send + 'static>;

pub trait RowSource<T>: Debug {
    /// Starts a single load. `on_done` runs once, possibly on another thread.
    fn load(&self, on_done: OnRows<T>);
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Body returned by the API alongside a non-2xx status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn decode_response<T>(response: &ehttp::Response) -> Result<Vec<T>, FetchError>
where
    T: for<'de> Deserialize<'de>,
{
    if !(200..300).contains(&response.status) {
        let message = serde_json::from_slice::<ErrorBody>(&response.bytes)
            .map(|body| body.error)
            .unwrap_or_else(|_| response.status_text.clone());
        return Err(FetchError::Status {
            status: response.status,
            message,
        });
    }

    Ok(serde_json::from_slice(&response.bytes)?)
}

/// Issues `GET url` and decodes the body as a JSON array of [`MpsEntry`].
pub fn fetch_mps_entries(
    fetcher: &dyn FetchService,
    url: &str,
    on_done: impl FnOnce(Result<Vec<MpsEntry>, FetchError>) + Send + 'static,
) {
    let request = ehttp::Request::get(url);
    fetcher.fetch(
        request,
        Box::new(move |result| {
            let outcome = result
                .map_err(FetchError::Transport)
                .and_then(|response| decode_response(&response));
            on_done(outcome);
        }),
    );
}

/// Loads the Master Production Schedule from the backend.
#[derive(Debug, Clone)]
pub struct HttpMpsSource {
    fetcher: Arc<dyn FetchService>,
    url: String,
}

impl HttpMpsSource {
    pub fn new(fetcher: Arc<dyn FetchService>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

impl RowSource<MpsEntry> for HttpMpsSource {
    fn load(&self, on_done: OnRows<MpsEntry>) {
        info!("Fetching MPS data from {}", self.url);
        fetch_mps_entries(self.fetcher.as_ref(), &self.url, move |result| match result {
            Ok(entries) => {
                info!("Fetched {} MPS entries", entries.len());
                on_done(entries);
            }
            Err(err) => {
                error!("Failed to fetch MPS data: {err}");
                on_done(Vec::new());
            }
        });
    }
}

/// Produces rows synchronously from a generator, e.g. a seeded fixture.
pub struct FixtureSource<T> {
    generate: Box<dyn Fn() -> Vec<T> + Send + Sync>,
}

impl<T> FixtureSource<T> {
    pub fn new(generate: impl Fn() -> Vec<T> + Send + Sync + 'static) -> Self {
        Self {
            generate: Box::new(generate),
        }
    }
}

impl<T> Debug for FixtureSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureSource").finish_non_exhaustive()
    }
}

impl<T> RowSource<T> for FixtureSource<T> {
    fn load(&self, on_done: OnRows<T>) {
        on_done((self.generate)());
    }
}
