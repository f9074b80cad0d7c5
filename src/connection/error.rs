/// Ways a connection attempt can fail.
///
/// [`ConnectionSimulator`](super::ConnectionSimulator) never produces these;
/// they exist so the wizard can handle a real connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    /// The server did not answer in time.
    #[error("connection timed out")]
    Timeout,

    /// The server rejected the connection.
    #[error("connection refused")]
    Refused,
}

/// Result delivered to the wizard when an attempt resolves.
pub type ConnectionResult = Result<(), ConnectionError>;
