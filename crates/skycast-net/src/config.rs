//! Public configuration for the network clients.
//!
//! The internal settings used by the clients are derived from this.

use std::time::Duration;

/// Default weather.gov API root.
pub const DEFAULT_NWS_BASE_URL: &str = "https://api.weather.gov";

/// Default Nominatim API root.
pub const DEFAULT_GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuration shared by the weather.gov and Nominatim clients.
///
/// # Example
///
/// ```
/// use skycast_net::NetConfig;
/// use std::time::Duration;
///
/// let config = NetConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_contact(Some("ops@example.com".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct NetConfig {
    /// Base URL for the weather.gov API
    pub(crate) nws_base_url: String,
    /// Base URL for the Nominatim API
    pub(crate) geocoder_base_url: String,
    /// Product token for the User-Agent header
    pub(crate) user_agent: String,
    /// Contact address appended to the User-Agent
    pub(crate) contact: Option<String>,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            nws_base_url: DEFAULT_NWS_BASE_URL.to_string(),
            geocoder_base_url: DEFAULT_GEOCODER_BASE_URL.to_string(),
            user_agent: concat!("skycast/", env!("CARGO_PKG_VERSION")).to_string(),
            contact: None,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl NetConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weather.gov base URL.
    #[must_use]
    pub fn with_nws_base_url(mut self, url: impl Into<String>) -> Self {
        self.nws_base_url = url.into();
        self
    }

    /// Set the Nominatim base URL.
    #[must_use]
    pub fn with_geocoder_base_url(mut self, url: impl Into<String>) -> Self {
        self.geocoder_base_url = url.into();
        self
    }

    /// Set the product token sent in the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set an optional contact address. Blank values are ignored.
    #[must_use]
    pub fn with_contact(mut self, contact: Option<String>) -> Self {
        self.contact = contact
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Full User-Agent header value: `skycast/0.3.0 (ops@example.com)`.
    pub fn user_agent_header(&self) -> String {
        match self.contact {
            Some(ref contact) => format!("{} ({contact})", self.user_agent),
            None => self.user_agent.clone(),
        }
    }
}
