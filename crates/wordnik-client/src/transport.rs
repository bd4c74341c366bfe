use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

/// HTTP GET seam used by [`crate::WordLookup`]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the response body of a 2xx response
    async fn get(&self, url: &Url) -> Result<String, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("Response is not JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Plain `reqwest` transport. Timeouts are whatever the client defaults to.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String, TransportError> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        Ok(response.text().await?)
    }
}
