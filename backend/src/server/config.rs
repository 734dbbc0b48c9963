//! HTTP server configuration object.

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Listener settings consumed by [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Configuration for a listener on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: (String, u16)) -> Self {
        Self {
            bind_addr,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
