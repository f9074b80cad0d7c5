use futures::future::BoxFuture;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::error::ConnectionResult;
use crate::wizard::{Event, EventSender};

/// A spawned connection attempt that posts its result onto the event queue.
///
/// The attempt is abandoned when its token is cancelled or the task is dropped,
/// so no result is posted after the owner has moved on.
#[derive(Debug)]
pub struct ConnectionTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl ConnectionTask {
    /// Spawns `attempt` on the current runtime.
    pub fn spawn(
        attempt: BoxFuture<'static, ConnectionResult>,
        events: EventSender,
        cancel: CancellationToken,
    ) -> Self {
        let task_cancel = cancel.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = task_cancel.cancelled() => debug!("connection attempt cancelled"),
                result = attempt => {
                    if events.send(Event::Connection(result)).is_err() {
                        debug!("event queue closed, dropping connection result");
                    }
                }
            }
        });
        Self { cancel, handle }
    }

    /// Abandons the attempt.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once the attempt has resolved or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ConnectionTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
