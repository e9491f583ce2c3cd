use async_trait::async_trait;
use reqwest::Client;

use crate::error::FetchError;

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://wttr.in";

/// Fetches `format=j1` reports from wttr.in (or a compatible server).
#[derive(Debug, Clone)]
pub struct WttrProvider {
    base_url: String,
    http: Client,
}

impl WttrProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }

    /// The location goes into the path as given, without escaping.
    pub fn request_url(&self, location: &str) -> String {
        format!("{}/{location}?format=j1", self.base_url.trim_end_matches('/'))
    }
}

impl Default for WttrProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    async fn fetch_raw(&self, location: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.request_url(location);
        tracing::debug!(%url, "requesting weather");

        let mut res = self.http.get(&url).send().await?;
        let status = res.status();

        let mut body = Vec::new();
        while let Some(chunk) = res.chunk().await? {
            body.try_reserve(chunk.len())
                .map_err(|source| FetchError::Buffer { received: body.len(), source })?;
            body.extend_from_slice(&chunk);
        }

        // Error pages are still handed to the parser; only transport failures stop here.
        tracing::debug!(bytes = body.len(), %status, "weather response received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::WeatherError, provider::get_weather};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    #[test]
    fn request_url_embeds_location_verbatim() {
        let provider = WttrProvider::new();
        assert_eq!(provider.request_url("London"), "https://wttr.in/London?format=j1");

        let provider = WttrProvider::with_base_url("http://localhost:8080/");
        assert_eq!(provider.request_url("Saint Petersburg"), "http://localhost:8080/Saint Petersburg?format=j1");
    }

    #[tokio::test]
    async fn fetch_returns_body_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/London"))
            .and(query_param("format", "j1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"weather":[]}"#))
            .expect(1)
            .mount(&server)
            .await;

        let provider = WttrProvider::with_base_url(server.uri());
        let body = provider.fetch_raw("London").await.expect("fetch should succeed");

        assert_eq!(body, br#"{"weather":[]}"#);
    }

    #[tokio::test]
    async fn fetch_handles_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let provider = WttrProvider::with_base_url(server.uri());
        let body = provider.fetch_raw("Oslo").await.unwrap();

        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn error_status_body_is_still_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let provider = WttrProvider::with_base_url(server.uri());
        let body = provider.fetch_raw("Oslo").await.expect("completed response is not a fetch error");

        assert_eq!(body, b"Service Unavailable");
    }

    #[tokio::test]
    async fn report_parsed_from_not_found_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Oslo"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"current_condition":[{"temp_C":"21","windspeedKmph":"10","winddir16Point":"NW","weatherDesc":[{"value":"Sunny"}]}],"weather":[{"maxtempC":"25","mintempC":"15"}]}"#,
            ))
            .mount(&server)
            .await;

        let provider = WttrProvider::with_base_url(server.uri());
        let report = get_weather(&provider, "Oslo").await.expect("body is a valid report");

        assert_eq!(report.description, "Sunny");
        assert_eq!(report.temperature_c, "21");
        assert_eq!(report.min_temp_c, "15");
    }

    #[tokio::test]
    async fn error_page_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"))
            .mount(&server)
            .await;

        let provider = WttrProvider::with_base_url(server.uri());
        let err = get_weather(&provider, "Oslo").await.unwrap_err();

        match err {
            WeatherError::Parse(parse_err) => assert_eq!(parse_err.code(), 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_fails_on_unreachable_host() {
        // Nothing listens on port 1.
        let provider = WttrProvider::with_base_url("http://127.0.0.1:1");
        let err = provider.fetch_raw("Oslo").await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }
}
