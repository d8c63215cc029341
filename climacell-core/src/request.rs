use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Method, Url};

use crate::{
    endpoint::Endpoint,
    error::Result,
    field::{Field, join_fields},
    unit::Unit,
};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "apikey";

/// Time window of a nowcast call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowcastWindow {
    /// Minutes between consecutive observations.
    pub timestep: u32,
    /// `None` asks the API to start at the current time.
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Default for NowcastWindow {
    fn default() -> Self {
        Self {
            timestep: 5,
            start_time: None,
            end_time: None,
        }
    }
}

/// Location, unit system and fields of one endpoint call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryParams<'a> {
    pub latitude: f64,
    pub longitude: f64,
    pub unit: Unit,
    pub fields: &'a [Field],
}

/// A fully built GET request, ready to hand to a transport.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub url: Url,
    api_key: String,
}

impl ApiRequest {
    pub fn method(&self) -> Method {
        Method::GET
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn query(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("endpoint", &self.endpoint)
            .field("url", &self.url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Shortest decimal representation that parses back to the same `f64`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Resolve an endpoint path against the base URL.
///
/// A path starting with `/` replaces the whole path of the base URL.
pub fn resolve_url(base_url: &str, path: &str) -> Result<Url> {
    let base = Url::parse(base_url)?;
    Ok(base.join(path)?)
}

/// Build the request for one endpoint call. Parameters are expected to be validated already.
pub fn build_request(
    base_url: &str,
    api_key: &str,
    endpoint: Endpoint,
    params: &QueryParams<'_>,
    window: Option<&NowcastWindow>,
) -> Result<ApiRequest> {
    let mut url = resolve_url(base_url, endpoint.path())?;

    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("lat", &format_number(params.latitude))
            .append_pair("lon", &format_number(params.longitude))
            .append_pair("unit_system", params.unit.as_str());

        if let Some(window) = window {
            let start_time = window
                .start_time
                .as_ref()
                .map_or_else(|| "now".to_string(), format_time);
            let end_time = window
                .end_time
                .as_ref()
                .map(format_time)
                .unwrap_or_default();

            query
                .append_pair("timestep", &window.timestep.to_string())
                .append_pair("start_time", &start_time)
                .append_pair("end_time", &end_time);
        }

        if !params.fields.is_empty() {
            query.append_pair("fields", &join_fields(params.fields, ","));
        }
    }

    tracing::debug!(endpoint = endpoint.path(), url = %url, "built request");

    Ok(ApiRequest {
        endpoint,
        url,
        api_key: api_key.to_string(),
    })
}
