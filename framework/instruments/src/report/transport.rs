use std::fmt::Display;

/// Sends a batch of line protocol text to a metrics collector.
pub trait MetricsTransport {
    /// POST `body` to `url`. The response is not inspected.
    fn post(&self, url: &str, body: &str) -> Result<(), TransportError>;
}

/// Failed to deliver a request to the metrics collector.
#[derive(derive_more::Error, derive_more::Display, Debug)]
#[display("Failed to send metrics to {url}: {reason}")]
pub struct TransportError {
    url: String,
    reason: String,
}

impl TransportError {
    pub fn new(url: impl Into<String>, reason: impl Display) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Why the request could not be delivered.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Blocking HTTP transport backed by a [ureq::Agent].
///
/// No timeout is configured, a hung collector will block the caller. Error statuses from the
/// collector are not treated as failures.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        Self { agent }
    }
}

impl MetricsTransport for HttpTransport {
    fn post(&self, url: &str, body: &str) -> Result<(), TransportError> {
        let response = self
            .agent
            .post(url)
            .send(body)
            .map_err(|e| TransportError::new(url, e))?;

        log::debug!("Metrics collector responded with {}", response.status());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_url_and_reason() {
        let err = TransportError::new("http://localhost:1", "connection refused");

        assert_eq!(
            err.to_string(),
            "Failed to send metrics to http://localhost:1: connection refused"
        );
        assert_eq!(err.reason(), "connection refused");
    }

    #[test]
    fn invalid_url_is_a_transport_error() {
        let result = HttpTransport::new().post("not a url", "robench,a=1 b=2");

        assert!(result.is_err());
    }
}
