//! Conversion coefficients from the Central Bank of Russia daily table.

use std::collections::HashMap;

use reqwest::header::HeaderMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::consts::{BASE_CURRENCIES, CBR_DAILY_URL};
use crate::error::FetchError;
use crate::http::ApiClient;

const NO_QUERY: &[(&str, &str)] = &[];

#[derive(Debug, Deserialize)]
struct DailyRates {
    #[serde(rename = "Valute")]
    valute: HashMap<String, Rate>,
}

#[derive(Debug, Deserialize)]
struct Rate {
    #[serde(rename = "Value")]
    value: f64,
}

/// Rouble value of one unit of `code`, or `None` when it is unknown.
///
/// `None` means "unknown", never zero. Failures are logged.
pub async fn get_coefficient(client: &ApiClient, code: &str) -> Option<f64> {
    get_coefficient_from(client, CBR_DAILY_URL, code).await
}

pub async fn get_coefficient_from(client: &ApiClient, url: &str, code: &str) -> Option<f64> {
    match fetch_coefficient(client, url, code).await {
        Ok(value) => {
            debug!(code, value, "currency coefficient");
            Some(value)
        }
        Err(err) => {
            warn!(code, %err, "currency coefficient unavailable");
            None
        }
    }
}

async fn fetch_coefficient(client: &ApiClient, url: &str, code: &str) -> Result<f64, FetchError> {
    let code = code.trim().to_ascii_uppercase();
    if BASE_CURRENCIES.contains(&code.as_str()) {
        return Ok(1.0);
    }

    let rates: DailyRates = client.get_json(url, HeaderMap::new(), NO_QUERY).await?;
    rates
        .valute
        .get(&code)
        .map(|rate| rate.value)
        .ok_or(FetchError::UnknownCurrency { code })
}
