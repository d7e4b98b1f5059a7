use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::consts::{CONNECT_TIMEOUT, PAGE_PAUSE, REQUEST_TIMEOUT, USER_AGENT};
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Pause between two consecutive page requests of one fetch cycle.
    pub page_pause: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
            page_pause: PAGE_PAUSE,
        }
    }
}

/// Thin JSON-over-GET client shared by every source and the rate lookup.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    settings: FetchSettings,
}

impl ApiClient {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self { inner, settings })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    pub async fn get_json<T, Q>(
        &self,
        url: &str,
        headers: HeaderMap,
        query: &Q,
    ) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        debug!(url, "GET");

        let response = self
            .inner
            .get(url)
            .headers(headers)
            .query(query)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        response.json::<T>().await.map_err(FetchError::Decode)
    }
}
