//! Connection attempts: the [`Connector`] seam and the tasks that run them.

mod error;
mod simulator;
mod task;

pub use error::{ConnectionError, ConnectionResult};
pub use simulator::{ConnectionSimulator, Connector};
pub use task::ConnectionTask;
