use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::TransportError,
    request::{API_KEY_HEADER, ApiRequest},
};

/// Default timeout of [`ReqwestTransport`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs the GET requests built by the client.
///
/// Custom implementations are injected through
/// [`ClientBuilder::transport`](crate::ClientBuilder::transport).
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// A `reqwest` client with [`DEFAULT_TIMEOUT`].
    pub fn with_default_timeout() -> Result<Self, TransportError> {
        let http = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::new(http))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let res = self
            .http
            .request(request.method(), request.url.clone())
            .header(API_KEY_HEADER, request.api_key())
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
