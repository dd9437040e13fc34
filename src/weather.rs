use crate::config::Config;
use reqwest::Client;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("weather API returned status {0}")]
    UpstreamStatus(u16),
}

/// Client for the weatherapi.com current-conditions endpoint.
///
/// The response body is treated as an opaque blob; no parsing happens here.
/// No timeout is configured beyond the transport defaults and failures are
/// not retried.
pub struct WeatherClient {
    client: Client,
    config: Config,
}

impl WeatherClient {
    pub fn new(config: Config) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent("WeatherLookup/1.0")
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetches current weather for `place` and returns the raw body bytes.
    ///
    /// A non-2xx upstream status is reported as `UpstreamStatus` with the
    /// body unread, so callers can pass the code through verbatim.
    pub async fn current(&self, place: &str) -> Result<Vec<u8>, WeatherError> {
        let url = format!("{}/current.json", self.config.weather_api_base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.weather_api_key.as_str()), ("q", place)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
