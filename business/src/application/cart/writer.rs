use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::domain::cart::model::CartSnapshot;
use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;

enum WriterMessage {
    Persist(CartSnapshot),
    Flush(oneshot::Sender<()>),
}

/// Handle to the background task that writes cart snapshots to the store.
///
/// Snapshots are written in the order they were queued. When several are
/// waiting at once only the newest is written, since each save replaces the
/// whole stored cart. The task ends once the handle is dropped and the queue
/// is drained.
pub struct SnapshotWriter {
    sender: mpsc::UnboundedSender<WriterMessage>,
    logger: Arc<dyn Logger>,
}

impl SnapshotWriter {
    /// Spawns the writer task on the current tokio runtime.
    pub fn spawn(store: Arc<dyn CartStore>, logger: Arc<dyn Logger>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run(store, receiver, logger.clone()));
        Self { sender, logger }
    }

    /// Queues a snapshot without waiting for it to be written.
    pub fn persist(&self, snapshot: CartSnapshot) {
        if self.sender.send(WriterMessage::Persist(snapshot)).is_err() {
            self.logger
                .error("Cart snapshot writer is gone, snapshot dropped");
        }
    }

    /// Resolves once every snapshot queued before the call has been handed
    /// to the store.
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.sender.send(WriterMessage::Flush(ack)).is_err() {
            self.logger.warn("Cart snapshot writer is gone, nothing to flush");
            return;
        }
        let _ = done.await;
    }
}

async fn run(
    store: Arc<dyn CartStore>,
    mut receiver: mpsc::UnboundedReceiver<WriterMessage>,
    logger: Arc<dyn Logger>,
) {
    logger.debug("Cart snapshot writer started");

    while let Some(message) = receiver.recv().await {
        let mut latest = None;
        let mut waiting = Vec::new();
        let mut superseded = 0usize;

        let mut next = Some(message);
        while let Some(message) = next {
            match message {
                WriterMessage::Persist(snapshot) => {
                    if latest.replace(snapshot).is_some() {
                        superseded += 1;
                    }
                }
                WriterMessage::Flush(ack) => waiting.push(ack),
            }
            next = receiver.try_recv().ok();
        }

        if let Some(snapshot) = latest {
            if superseded > 0 {
                logger.debug(&format!(
                    "Skipping {} superseded cart snapshots",
                    superseded
                ));
            }
            logger.debug(&format!(
                "Writing cart snapshot with {} lines",
                snapshot.len()
            ));
            store.save(&snapshot).await;
        }

        for ack in waiting {
            let _ = ack.send(());
        }
    }

    logger.debug("Cart snapshot writer stopped");
}
