use crate::domain::ports::Storage;
use crate::utils::error::{Result, ShopError};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

enum WriteCommand {
    Write { key: String, value: String },
    Flush(oneshot::Sender<()>),
}

/// Moves writes onto a background task so callers never wait on storage.
///
/// Writes are applied in the order they were issued. Reads go straight to the
/// inner storage and do not wait for queued writes; call [`flush`] first when
/// that matters.
///
/// [`flush`]: QueuedStorage::flush
#[derive(Debug, Clone)]
pub struct QueuedStorage<S: Storage> {
    inner: Arc<S>,
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl<S: Storage + 'static> QueuedStorage<S> {
    /// Starts the writer task. Must be called from within a tokio runtime.
    /// The task ends once every handle has been dropped and the queue drained.
    pub fn spawn(inner: S) -> (Self, JoinHandle<()>) {
        let inner = Arc::new(inner);
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_writer(Arc::clone(&inner), rx));
        (Self { inner, tx }, handle)
    }

    /// Waits until every write queued before this call has been applied.
    pub async fn flush(&self) -> Result<()> {
        let (done_tx, done_rx) = oneshot::channel();
        self.tx
            .send(WriteCommand::Flush(done_tx))
            .map_err(|_| writer_stopped("<flush>"))?;
        done_rx.await.map_err(|_| writer_stopped("<flush>"))
    }
}

fn writer_stopped(key: &str) -> ShopError {
    ShopError::PersistenceError {
        key: key.to_string(),
        message: "background writer has stopped".to_string(),
    }
}

async fn run_writer<S: Storage + 'static>(
    inner: Arc<S>,
    mut rx: mpsc::UnboundedReceiver<WriteCommand>,
) {
    while let Some(command) = rx.recv().await {
        match command {
            WriteCommand::Write { key, value } => {
                let storage = Arc::clone(&inner);
                let write_key = key.clone();
                let result =
                    tokio::task::spawn_blocking(move || storage.write_value(&write_key, &value))
                        .await;

                match result {
                    Ok(Ok(())) => tracing::debug!("Persisted '{}'", key),
                    Ok(Err(e)) => tracing::warn!("Background write of '{}' failed: {}", key, e),
                    Err(e) => tracing::error!("Background write of '{}' panicked: {}", key, e),
                }
            }
            WriteCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    tracing::debug!("Background writer stopped");
}

impl<S: Storage + 'static> Storage for QueuedStorage<S> {
    fn read_value(&self, key: &str) -> Result<Option<String>> {
        self.inner.read_value(key)
    }

    fn write_value(&self, key: &str, value: &str) -> Result<()> {
        self.tx
            .send(WriteCommand::Write {
                key: key.to_string(),
                value: value.to_string(),
            })
            .map_err(|_| writer_stopped(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStorage;

    #[tokio::test]
    async fn test_writes_land_in_order_after_flush() {
        let memory = MemoryStorage::new();
        let (queued, _handle) = QueuedStorage::spawn(memory.clone());

        for quantity in 1..=5 {
            queued
                .write_value("cart", &format!(r#"{{"1":{}}}"#, quantity))
                .unwrap();
        }
        queued.flush().await.unwrap();

        assert_eq!(memory.get("cart").as_deref(), Some(r#"{"1":5}"#));
        assert_eq!(memory.write_count(), 5);
    }

    #[tokio::test]
    async fn test_failed_write_does_not_stop_writer() {
        let memory = MemoryStorage::new();
        let (queued, _handle) = QueuedStorage::spawn(memory.clone());

        memory.fail_writes(true);
        queued.write_value("cart", "{}").unwrap();
        queued.flush().await.unwrap();

        memory.fail_writes(false);
        queued.write_value("cart", r#"{"2":1}"#).unwrap();
        queued.flush().await.unwrap();

        assert_eq!(memory.get("cart").as_deref(), Some(r#"{"2":1}"#));
    }

    #[tokio::test]
    async fn test_writer_exits_when_handles_dropped() {
        let memory = MemoryStorage::new();
        let (queued, handle) = QueuedStorage::spawn(memory.clone());
        queued.write_value("cart", r#"{"3":1}"#).unwrap();
        drop(queued);

        handle.await.unwrap();
        assert_eq!(memory.get("cart").as_deref(), Some(r#"{"3":1}"#));
    }
}
