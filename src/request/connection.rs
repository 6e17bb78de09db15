//! Per-connection addressing.
//!
//! # Responsibilities
//! - Capture remote and local socket addresses when a connection is accepted
//! - Travel with the request as an extension so the adapter can observe them
//!
//! # Design Decisions
//! - Both addresses are optional: requests built off a live connection carry
//!   them, synthetic requests (tests, embedding callers) may not

use std::net::SocketAddr;

use axum::extract::connect_info::Connected;
use axum::serve::IncomingStream;
use tokio::net::TcpListener;

/// Socket-level addressing of one accepted connection.
///
/// The server adapter captures this per connection via axum's connect-info
/// machinery; embedding callers that build requests by hand can insert it
/// into the request extensions directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionInfo {
    /// Peer address of the connection, when known.
    pub remote: Option<SocketAddr>,
    /// Server-side address the connection was accepted on, when known.
    pub local: Option<SocketAddr>,
}

impl ConnectionInfo {
    /// Addressing for a request built without a live connection.
    pub fn unknown() -> Self {
        Self::default()
    }
}

impl Connected<IncomingStream<'_, TcpListener>> for ConnectionInfo {
    fn connect_info(stream: IncomingStream<'_, TcpListener>) -> Self {
        Self {
            remote: Some(*stream.remote_addr()),
            local: stream.io().local_addr().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_connection_carries_no_addresses() {
        let info = ConnectionInfo::unknown();
        assert!(info.remote.is_none());
        assert!(info.local.is_none());
    }
}
