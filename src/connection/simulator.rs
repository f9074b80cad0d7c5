use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;

use super::error::ConnectionResult;
use crate::model::Credentials;

/// Something that can attempt a connection with the given credentials.
pub trait Connector {
    /// Returns the pending attempt. It does nothing until polled.
    fn connect(&self, credentials: &Credentials) -> BoxFuture<'static, ConnectionResult>;
}

/// Stand-in connector: waits a fixed delay, then always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionSimulator {
    delay: Duration,
}

impl Default for ConnectionSimulator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl ConnectionSimulator {
    /// Delay used when none is configured.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Connector for ConnectionSimulator {
    fn connect(&self, credentials: &Credentials) -> BoxFuture<'static, ConnectionResult> {
        debug!(host = %credentials.host, delay = ?self.delay, "simulating connection");
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            Ok(())
        }
        .boxed()
    }
}
