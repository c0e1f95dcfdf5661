//! Synchronous transcript notification channel.
//!
//! The host UI owns the transcript. The bridge publishes every prompt (and,
//! separately, the final response) through this channel and waits for the
//! UI actor to acknowledge the entry, so the transcript records the attempt
//! before generation runs. The wait is bounded: an unresponsive UI fails
//! the request instead of wedging it.

use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;

/// A single entry published to the host transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    /// The prompt about to be generated against.
    Prompt(String),
    /// The finished response text.
    Response(String),
}

/// An entry plus the acknowledgment the notifier is waiting on.
#[derive(Debug)]
pub struct TranscriptMessage {
    pub entry: TranscriptEntry,
    ack: oneshot::Sender<()>,
}

impl TranscriptMessage {
    /// Signal the notifier that the entry has been recorded.
    pub fn acknowledge(self) {
        let _ = self.ack.send(());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    /// The UI side of the channel is gone.
    #[error("transcript receiver disconnected")]
    Disconnected,

    /// The UI did not acknowledge within the bounded wait.
    #[error("transcript acknowledgment timed out after {0:?}")]
    AckTimeout(Duration),
}

/// Request-path side: publishes entries and waits for acknowledgment.
#[derive(Debug, Clone)]
pub struct TranscriptNotifier {
    tx: mpsc::Sender<TranscriptMessage>,
    ack_timeout: Duration,
}

/// UI-actor side: receives entries to record.
#[derive(Debug)]
pub struct TranscriptEvents {
    rx: mpsc::Receiver<TranscriptMessage>,
}

/// Create the notifier/events pair with the given acknowledgment timeout.
pub fn transcript_channel(ack_timeout: Duration) -> (TranscriptNotifier, TranscriptEvents) {
    // Capacity 1 keeps the publisher in lockstep with the UI actor.
    let (tx, rx) = mpsc::channel(1);
    (
        TranscriptNotifier { tx, ack_timeout },
        TranscriptEvents { rx },
    )
}

impl TranscriptNotifier {
    /// Publish one entry and wait for the UI to acknowledge it.
    ///
    /// The timeout covers both delivery and acknowledgment, so a UI actor
    /// that has stopped draining the channel cannot block the caller past
    /// the bound either.
    pub async fn notify(&self, entry: TranscriptEntry) -> Result<(), TranscriptError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        let deliver = async {
            self.tx
                .send(TranscriptMessage {
                    entry,
                    ack: ack_tx,
                })
                .await
                .map_err(|_| TranscriptError::Disconnected)?;
            ack_rx.await.map_err(|_| TranscriptError::Disconnected)
        };
        timeout(self.ack_timeout, deliver)
            .await
            .map_err(|_| TranscriptError::AckTimeout(self.ack_timeout))?
    }
}

impl TranscriptEvents {
    /// Next entry to record, or `None` once every notifier is dropped.
    pub async fn recv(&mut self) -> Option<TranscriptMessage> {
        self.rx.recv().await
    }
}
