use std::{future::Future, time::Duration};

use tokio::{sync::mpsc, task::JoinHandle};

/// Handle for pushing values into a debouncer task
///
/// Dropping the handle flushes any pending value and stops the task.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawns a task that hands `handler` the last value of each burst once
    /// `quiet` has passed without a newer one.
    pub fn spawn<F, Fut>(quiet: Duration, mut handler: F) -> Self
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();

        let task = tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    tokio::select! {
                        next = rx.recv() => match next {
                            Some(value) => latest = value,
                            None => {
                                handler(latest).await;
                                return;
                            }
                        },
                        _ = tokio::time::sleep(quiet) => break,
                    }
                }
                handler(latest).await;
            }
            tracing::debug!("Debouncer stopped");
        });

        Self { tx, task }
    }

    pub fn push(&self, value: T) {
        if self.tx.send(value).is_err() {
            tracing::error!("Debouncer task is no longer running");
        }
    }

    /// Close the input, deliver any pending value and wait for the task to end
    pub async fn shutdown(self) {
        let Self { tx, task } = self;
        drop(tx);
        if let Err(e) = task.await {
            tracing::error!(error = %e, "Debouncer task failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(String) -> std::future::Ready<()>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler = move |value: String| {
            sink.lock().unwrap().push(value);
            std::future::ready(())
        };
        (seen, handler)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_delivers_last_value_after_quiet_period() {
        let (seen, handler) = recorder();
        let debouncer = Debouncer::spawn(Duration::from_millis(350), handler);

        debouncer.push("W".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("Wi".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("Wicked".to_string());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(seen.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*seen.lock().unwrap(), vec!["Wicked".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_each_deliver() {
        let (seen, handler) = recorder();
        let debouncer = Debouncer::spawn(Duration::from_millis(350), handler);

        debouncer.push("A".to_string());
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.push("Ab".to_string());
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(*seen.lock().unwrap(), vec!["A".to_string(), "Ab".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_flushes_pending_value() {
        let (seen, handler) = recorder();
        let debouncer = Debouncer::spawn(Duration::from_millis(350), handler);

        debouncer.push("Dune".to_string());
        debouncer.shutdown().await;

        assert_eq!(*seen.lock().unwrap(), vec!["Dune".to_string()]);
    }
}
