//! Network adapters for skycast.
//!
//! - [`DefaultNwsClient`] implements `ForecastPort` against api.weather.gov
//! - [`DefaultGeocoder`] implements `GeocoderPort` against Nominatim
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// The Default* aliases are used through the port traits, not their generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Clients
pub use client::{DefaultGeocoder, DefaultNwsClient};

// Configuration
pub use config::{DEFAULT_GEOCODER_BASE_URL, DEFAULT_NWS_BASE_URL, NetConfig};

// Errors raised while constructing clients
pub use error::NetError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
