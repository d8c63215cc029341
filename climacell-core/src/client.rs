use std::{fmt, sync::Arc};

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{
    endpoint::Endpoint,
    error::{ConfigError, Error, Result, check_http_error},
    field::Field,
    model::{NowcastData, RealtimeData},
    request::{ApiRequest, NowcastWindow, QueryParams, build_request},
    transport::{HttpTransport, ReqwestTransport},
    unit::Unit,
    validate::validate_request,
};

pub const DEFAULT_BASE_URL: &str = "https://api.climacell.co/v3";

/// Client for the weather API.
///
/// Holds only read-only configuration, so it can be cloned and shared freely.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    api_key: String,
}

#[derive(Default)]
pub struct ClientBuilder {
    api_key: String,
    base_url: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if base_url.is_empty() || Url::parse(&base_url).is_err() {
            return Err(ConfigError::InvalidBaseUrl.into());
        }

        if self.api_key.is_empty() {
            return Err(ConfigError::InvalidApiKey.into());
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let transport = ReqwestTransport::with_default_timeout().map_err(Error::Transport)?;
                Arc::new(transport)
            }
        };

        Ok(Client {
            transport,
            base_url,
            api_key: self.api_key,
        })
    }
}

impl Client {
    /// Client for the public API at [`DEFAULT_BASE_URL`] with the default transport.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current conditions at a location.
    pub async fn realtime(
        &self,
        latitude: f64,
        longitude: f64,
        unit: Unit,
        fields: &[Field],
    ) -> Result<RealtimeData> {
        let endpoint = Endpoint::Realtime;
        validate_request(endpoint, latitude, longitude, fields, None, None)?;

        let params = QueryParams {
            latitude,
            longitude,
            unit,
            fields,
        };
        let request = build_request(&self.base_url, &self.api_key, endpoint, &params, None)?;
        self.fetch(&request).await
    }

    /// Short-term forecast at a location, one entry per timestep.
    pub async fn nowcast(
        &self,
        latitude: f64,
        longitude: f64,
        unit: Unit,
        window: &NowcastWindow,
        fields: &[Field],
    ) -> Result<Vec<NowcastData>> {
        let endpoint = Endpoint::Nowcast;
        validate_request(
            endpoint,
            latitude,
            longitude,
            fields,
            window.start_time.as_ref(),
            window.end_time.as_ref(),
        )?;

        let params = QueryParams {
            latitude,
            longitude,
            unit,
            fields,
        };
        let request = build_request(
            &self.base_url,
            &self.api_key,
            endpoint,
            &params,
            Some(window),
        )?;
        self.fetch(&request).await
    }

    async fn fetch<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        let endpoint = request.endpoint.path();

        tracing::debug!(endpoint, "sending request");
        let res = self.transport.get(request).await.map_err(Error::Transport)?;
        tracing::debug!(endpoint, status = res.status, "received response");

        check_http_error(res.status, &res.body, endpoint)?;

        serde_json::from_slice(&res.body).map_err(|source| Error::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("transport", &self.transport)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
