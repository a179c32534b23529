use std::fmt::Debug;

use ehttp::{Request, Response, Result};

/// Completion callback for a single request.
pub type OnDone = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnDone);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        ehttp::fetch(request, on_done)
    }
}

/// Answers every request with the same canned result, synchronously.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockFetcher {
    pub response: Option<Result<Response>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockFetcher {
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            response: Some(Ok(Response {
                url: String::new(),
                ok: (200..300).contains(&status),
                status,
                status_text: String::new(),
                headers: ehttp::Headers::new(&[("content-type", "application/json")]),
                bytes: body.to_string().into_bytes(),
            })),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Some(Err(message.into())),
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl FetchService for MockFetcher {
    fn fetch(&self, _request: Request, on_done: OnDone) {
        if let Some(response) = &self.response {
            on_done(response.clone());
        } else {
            on_done(Err("MockFetcher: no response set".to_owned()));
        }
    }
}
