//! weather.gov and Nominatim clients.
//!
//! Both clients are generic over an HTTP backend. Production code uses the
//! `Default*` aliases; tests construct them with a fake backend.

mod nominatim;
mod nws;

use crate::config::NetConfig;
use crate::error::NetResult;
use crate::http::{GEO_JSON, HttpBackend, JSON, ReqwestBackend};
use crate::models::NetSettings;

// ============================================================================
// Type Aliases
// ============================================================================

/// weather.gov client using the reqwest HTTP backend.
pub type DefaultNwsClient = NwsClient<ReqwestBackend>;

/// Nominatim geocoder using the reqwest HTTP backend.
pub type DefaultGeocoder = NominatimGeocoder<ReqwestBackend>;

// ============================================================================
// Clients
// ============================================================================

/// Client for the weather.gov points and forecast endpoints.
pub struct NwsClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) settings: NetSettings,
}

/// Client for the Nominatim search endpoint.
pub struct NominatimGeocoder<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) settings: NetSettings,
}

impl DefaultNwsClient {
    /// Create a client with the given configuration.
    pub fn new(config: &NetConfig) -> NetResult<Self> {
        let settings = NetSettings::from_config(config)?;
        let backend = ReqwestBackend::new(&settings, GEO_JSON)?;
        Ok(Self { backend, settings })
    }
}

impl DefaultGeocoder {
    /// Create a geocoder with the given configuration.
    pub fn new(config: &NetConfig) -> NetResult<Self> {
        let settings = NetSettings::from_config(config)?;
        let backend = ReqwestBackend::new(&settings, JSON)?;
        Ok(Self { backend, settings })
    }
}

#[cfg(test)]
impl<B: HttpBackend> NwsClient<B> {
    /// Create a client with a custom backend.
    pub(crate) const fn with_backend(settings: NetSettings, backend: B) -> Self {
        Self { backend, settings }
    }
}

#[cfg(test)]
impl<B: HttpBackend> NominatimGeocoder<B> {
    /// Create a geocoder with a custom backend.
    pub(crate) const fn with_backend(settings: NetSettings, backend: B) -> Self {
        Self { backend, settings }
    }
}
