// Extension catalog HTTP client.
// Owns the single reqwest session and converts HTTP failures into errors.

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::error::{RankingError, Result};

pub const CATALOG_BASE_URL: &str = "https://extensions.gnome.org";
pub const EXTENSION_QUERY_PATH: &str = "/extension-query/";

/// Client for the extensions.gnome.org query API.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the public catalog.
    pub fn new() -> Result<Self> {
        Self::with_base_url(CATALOG_BASE_URL)
    }

    /// Create a client against another host, e.g. a mirror or a test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ego-ranking/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).query(params).send().await?;
        debug!(url = %response.url(), status = %response.status(), "catalog response");

        check_response(response)
    }
}

/// Reject anything but a 2xx status.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RankingError::Status {
            status,
            url: response.url().to_string(),
        })
    }
}
