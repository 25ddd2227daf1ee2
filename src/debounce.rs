//! Input debouncing.
//!
//! A [`Debouncer`] collapses a burst of input events into a single emission.
//! Every event restarts the quiescence window; once the window elapses with no
//! further input, the latest value is emitted. Superseded values are dropped
//! without ever being emitted, so output computed from older input can never
//! follow output computed from newer input.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::debug;

use crate::{DorkError, Result};

/// Default quiescence window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Debounces values pushed from input events.
pub struct Debouncer<T> {
    tx: Option<UnboundedSender<T>>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawns the debounce task on the current tokio runtime.
    ///
    /// Settled values are delivered on the returned receiver.
    pub fn new(window: Duration) -> (Self, UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(window, rx, out_tx));
        (Self { tx: Some(tx), task }, out_rx)
    }

    /// Records an input event.
    pub fn push(&self, value: T) -> Result<()> {
        let tx = self.tx.as_ref().ok_or(DorkError::Closed)?;
        tx.send(value).map_err(|_| DorkError::Closed)
    }

    /// Stops accepting input and waits for the task to finish.
    ///
    /// A value still inside its window is emitted before this returns.
    pub async fn close(mut self) {
        self.tx.take();
        let _ = (&mut self.task).await;
    }
}

async fn run<T>(window: Duration, mut rx: UnboundedReceiver<T>, out: UnboundedSender<T>) {
    while let Some(mut latest) = rx.recv().await {
        loop {
            tokio::select! {
                next = rx.recv() => match next {
                    Some(value) => latest = value,
                    None => {
                        debug!("Input closed, flushing pending value");
                        let _ = out.send(latest);
                        return;
                    }
                },
                _ = sleep(window) => {
                    if out.send(latest).is_err() {
                        return;
                    }
                    break;
                }
            }
        }
    }
}
