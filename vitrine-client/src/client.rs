//! API client core

use shared::response::HealthStatus;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::transport::{NetworkTransport, Transport};

/// Typed client for the product/coupon management API.
///
/// Generic over the [`Transport`] seam: production code uses
/// [`NetworkTransport`], in-process setups use
/// [`OneshotTransport`](crate::OneshotTransport). Every mutation leaves the
/// caller to re-fetch the affected collection; the client never merges
/// state locally.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport> {
    transport: T,
}

impl ApiClient<NetworkTransport> {
    /// Connect over the network using the given configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            transport: NetworkTransport::new(config)?,
        })
    }
}

impl<T: Transport> ApiClient<T> {
    /// Build a client over any transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Ping the backend.
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.transport.get("/health/", &[]).await
    }
}
