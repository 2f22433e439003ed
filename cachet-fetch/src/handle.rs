//! Single-shot result stream for fetch operations.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::FetchError;
use crate::strategy::FetchResult;

/// Handle to an in-flight fetch.
///
/// The handle is a single-shot stream: it yields exactly one
/// `Result<FetchResult, FetchError>` and then ends. Dropping the handle
/// before completion cancels the fetch task; a cache write the task already
/// handed to the runtime still completes in the background.
#[derive(Debug)]
pub struct FetchHandle {
    rx: oneshot::Receiver<Result<FetchResult, FetchError>>,
    task: JoinHandle<()>,
    finished: bool,
}

impl FetchHandle {
    pub(crate) fn new(
        rx: oneshot::Receiver<Result<FetchResult, FetchError>>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            rx,
            task,
            finished: false,
        }
    }

    /// Waits for the single result.
    pub async fn recv(mut self) -> Result<FetchResult, FetchError> {
        match (&mut self.rx).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Canceled),
        }
    }

    /// Cancels the fetch, releasing the handle.
    pub fn cancel(self) {
        self.task.abort();
    }

    /// Returns true once the fetch task has finished running.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl Stream for FetchHandle {
    type Item = Result<FetchResult, FetchError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.finished {
            return Poll::Ready(None);
        }

        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(outcome) => {
                this.finished = true;
                match outcome {
                    Ok(result) => Poll::Ready(Some(result)),
                    // The sender was dropped without delivering: canceled.
                    Err(_) => Poll::Ready(Some(Err(FetchError::Canceled))),
                }
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cachet_core::{Headers, HttpResponse, ResponseSource, StrategyKind};
    use futures::StreamExt;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn result() -> Result<FetchResult, FetchError> {
        Ok(FetchResult::new(
            HttpResponse::new(200, Headers::new(), b"ok".to_vec()),
            ResponseSource::Network,
            StrategyKind::NoCache,
        ))
    }

    #[tokio::test]
    async fn test_stream_yields_one_value_then_ends() {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let _ = tx.send(result());
        });
        let mut handle = FetchHandle::new(rx, task);

        let first = handle.next().await;
        let second = handle.next().await;

        assert!(matches!(first, Some(Ok(_))));
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn test_recv_returns_the_value() {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let _ = tx.send(result());
        });
        let handle = FetchHandle::new(rx, task);

        let received = handle.recv().await.unwrap();
        assert_eq!(received.response.body, b"ok");
    }

    #[tokio::test]
    async fn test_dropped_sender_surfaces_cancellation() {
        let (tx, rx) = oneshot::channel::<Result<FetchResult, FetchError>>();
        drop(tx);
        let task = tokio::spawn(async {});
        let mut handle = FetchHandle::new(rx, task);

        let item = handle.next().await;
        assert!(matches!(item, Some(Err(FetchError::Canceled))));
        assert!(handle.next().await.is_none());
    }

    #[tokio::test]
    async fn test_cancel_stops_the_task() {
        let completed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&completed);

        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            flag.store(true, Ordering::SeqCst);
            let _ = tx.send(result());
        });

        let handle = FetchHandle::new(rx, task);
        handle.cancel();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(!completed.load(Ordering::SeqCst));
    }
}
