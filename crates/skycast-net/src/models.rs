//! Internal settings and wire types for the weather.gov and Nominatim APIs.

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::config::{DEFAULT_GEOCODER_BASE_URL, DEFAULT_NWS_BASE_URL, NetConfig};
use crate::error::NetResult;

// ============================================================================
// Internal configuration
// ============================================================================

/// Parsed client settings derived from [`NetConfig`].
#[derive(Debug, Clone)]
pub struct NetSettings {
    pub nws_base_url: Url,
    pub geocoder_base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_retries: u8,
    pub retry_base_delay_ms: u64,
}

impl NetSettings {
    /// Validate and convert the public configuration.
    pub fn from_config(config: &NetConfig) -> NetResult<Self> {
        Ok(Self {
            nws_base_url: Url::parse(&config.nws_base_url)?,
            geocoder_base_url: Url::parse(&config.geocoder_base_url)?,
            user_agent: config.user_agent_header(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
        })
    }
}

#[cfg(test)]
impl Default for NetSettings {
    fn default() -> Self {
        let config = NetConfig::default();
        Self {
            nws_base_url: Url::parse(DEFAULT_NWS_BASE_URL).expect("default URL is valid"),
            geocoder_base_url: Url::parse(DEFAULT_GEOCODER_BASE_URL)
                .expect("default URL is valid"),
            user_agent: config.user_agent_header(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            retry_base_delay_ms: 500,
        }
    }
}

// ============================================================================
// weather.gov
// ============================================================================

/// `GET /points/{lat},{lon}`
#[derive(Debug, Clone, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsProperties {
    pub forecast: Option<String>,
    pub forecast_hourly: Option<String>,
    pub relative_location: Option<RelativeLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeLocation {
    pub properties: RelativeLocationProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeLocationProperties {
    pub city: Option<String>,
    pub state: Option<String>,
}

/// `GET {forecast}` and `GET {forecastHourly}`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<PeriodDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDto {
    pub number: u32,
    #[serde(default)]
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub is_daytime: bool,
    pub temperature: i32,
    #[serde(default = "default_temperature_unit")]
    pub temperature_unit: String,
    #[serde(default)]
    pub wind_speed: String,
    #[serde(default)]
    pub wind_direction: String,
    pub probability_of_precipitation: Option<QuantitativeValue>,
    #[serde(default)]
    pub short_forecast: String,
    #[serde(default)]
    pub detailed_forecast: String,
}

/// `{"unitCode": "wmoUnit:percent", "value": 20}`; `value` may be null.
#[derive(Debug, Clone, Deserialize)]
pub struct QuantitativeValue {
    pub value: Option<f64>,
}

fn default_temperature_unit() -> String {
    "F".to_string()
}

// ============================================================================
// Nominatim
// ============================================================================

/// One element of the `/search?format=jsonv2` array.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
