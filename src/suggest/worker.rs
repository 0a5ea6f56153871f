//! Suggestion worker thread
//!
//! Runs fetches on a background thread with its own tokio runtime so the UI
//! loop never blocks on the network. Requests arrive over a tokio channel and
//! responses go back over a std channel the UI polls with `try_recv`.
//!
//! A new request cancels the one still in flight. The cancelled request
//! reports [`FetchError::Cancelled`]; the controller drops it by generation
//! anyway.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::{FetchError, FetchRequest, FetchResponse, SuggestionService};

/// Spawn the suggestion worker thread
///
/// The thread exits once every request sender is dropped.
pub fn spawn_worker<S: SuggestionService>(
    service: S,
    request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::warn!("suggestion worker failed to start runtime: {}", e);
                return;
            }
        };
        runtime.block_on(worker_loop(Arc::new(service), request_rx, response_tx));
    });
}

/// Process requests until the channel is closed
async fn worker_loop<S: SuggestionService>(
    service: Arc<S>,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    let mut in_flight: Option<CancellationToken> = None;

    while let Some(request) = request_rx.recv().await {
        if let Some(token) = in_flight.take() {
            token.cancel();
        }

        let token = CancellationToken::new();
        in_flight = Some(token.clone());

        let service = Arc::clone(&service);
        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            let FetchRequest {
                generation,
                keyword,
            } = request;

            let result = tokio::select! {
                biased;
                _ = token.cancelled() => Err(FetchError::Cancelled),
                result = service.suggest(&keyword) => result,
            };

            if response_tx.send(FetchResponse { generation, result }).is_err() {
                log::debug!("dropping response {}: receiver gone", generation);
            }
        });
    }

    if let Some(token) = in_flight {
        token.cancel();
    }
    log::debug!("suggestion worker shutting down");
}

/// UI-side handle to a running suggestion worker
#[derive(Debug)]
pub struct SuggestionWorker {
    request_tx: UnboundedSender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
}

impl SuggestionWorker {
    pub fn spawn<S: SuggestionService>(service: S) -> Self {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(service, request_rx, response_tx);
        Self {
            request_tx,
            response_rx,
        }
    }

    /// Queue a fetch; returns false if the worker is gone
    pub fn send(&self, request: FetchRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Next finished fetch, without blocking
    pub fn try_recv(&self) -> Option<FetchResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::debug!("suggestion worker disconnected");
                None
            }
        }
    }

    /// Block until a fetch finishes or `timeout` elapses
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<FetchResponse> {
        self.response_rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
