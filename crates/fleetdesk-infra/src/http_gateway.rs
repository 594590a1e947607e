//! HTTP implementation of [`TruckGateway`]

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use fleetdesk_domain::TruckGateway;
use fleetdesk_types::{ConfigError, Error, Result, Truck};

const TRUCKS_PATH: &str = "trucks";

/// Talks JSON to `<endpoint>/trucks`.
///
/// No auth headers, timeout or retry are configured. Response status codes
/// are not checked: every body is parsed as JSON and a body of the wrong
/// shape surfaces as [`Error::Decode`].
#[derive(Clone, Debug)]
pub struct HttpTruckGateway {
    client: Client,
    base_url: Url,
}

impl HttpTruckGateway {
    /// Create a gateway for the API rooted at `endpoint`
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_client(Client::new(), parse_endpoint(endpoint)?)
    }

    /// Use a preconfigured client; `base_url` must be an http(s) URL
    pub fn with_client(client: Client, base_url: Url) -> Result<Self> {
        let base_url = check_base_url(base_url)?;
        Ok(Self { client, base_url })
    }

    /// Collection URL, or the member URL when `id` is given
    fn trucks_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // check_base_url only accepts http(s), which always has a path
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(TRUCKS_PATH);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }
}

/// Parse and check an API base URL
pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint.trim()).map_err(|e| ConfigError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    check_base_url(url)
}

fn check_base_url(url: Url) -> Result<Url> {
    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        other => Err(ConfigError::InvalidEndpoint {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }
        .into()),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| Error::Decode {
        status: status.as_u16(),
        source,
    })
}

#[async_trait]
impl TruckGateway for HttpTruckGateway {
    async fn list(&self) -> Result<Vec<Truck>> {
        let url = self.trucks_url(None);
        tracing::debug!(%url, "GET trucks");
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn create(&self, truck: &Truck) -> Result<Truck> {
        let url = self.trucks_url(None);
        tracing::debug!(%url, code = %truck.code, "POST truck");
        let response = self.client.post(url).json(truck).send().await?;
        read_json(response).await
    }

    async fn update(&self, id: &str, truck: &Truck) -> Result<Truck> {
        let url = self.trucks_url(Some(id));
        tracing::debug!(%url, "PUT truck");
        let response = self.client.put(url).json(truck).send().await?;
        read_json(response).await
    }
}
