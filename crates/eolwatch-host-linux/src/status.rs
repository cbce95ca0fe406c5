//! Lifecycle API client
//!
//! One blocking GET of `<api_url>?active=true&version=<id>` per lookup. The
//! API answers with a JSON object whose `count` field is the number of active
//! releases at that version; zero means the release is EOL.

use eolwatch_host_api::StatusSource;
use eolwatch_util::{EolError, Result, default_os_release_path};
use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

use crate::read_version_id;

/// Build the lookup URL for a version
pub fn build_query_url(api_url: &str, version: u32) -> Result<Url> {
    let mut url = Url::parse(api_url).map_err(|e| EolError::invalid_url(api_url, e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("active", "true")
        .append_pair("version", &version.to_string());
    Ok(url)
}

/// Extract the `count` field from a response body.
///
/// Integers, fractional numbers (truncated) and strings holding an integer
/// are accepted.
pub fn parse_count(body: &[u8]) -> Result<i64> {
    let text = std::str::from_utf8(body)
        .map_err(|e| EolError::payload(format!("response is not UTF-8: {e}")))?;
    let response: Value = serde_json::from_str(text)
        .map_err(|e| EolError::payload(format!("response is not JSON: {e}")))?;

    match response.get("count") {
        // Floats truncate toward zero, the way int() coerces them
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or_else(|| EolError::payload(format!("count {n} is not a number"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| EolError::payload(format!("count {s:?} is not an integer"))),
        Some(other) => Err(EolError::payload(format!("count has unexpected type: {other}"))),
        None => Err(EolError::payload("response has no count field")),
    }
}

/// Ask the lifecycle API whether `version` is EOL.
///
/// Returns true when no active release matches the version. This also reads
/// as EOL for versions the API has never heard of.
pub fn fetch_eol_status(client: &Client, api_url: &str, version: u32) -> Result<bool> {
    let url = build_query_url(api_url, version)?;
    debug!(url = %url, version, "Querying lifecycle API");

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| EolError::http(e.to_string()))?;

    let body = response
        .bytes()
        .map_err(|e| EolError::http(format!("failed to read response body: {e}")))?;

    let count = parse_count(&body)?;
    debug!(version, count, "Lifecycle API responded");

    Ok(count == 0)
}

/// Status source backed by the os-release file and the lifecycle API
#[derive(Debug)]
pub struct HttpStatusSource {
    client: Client,
    api_url: String,
    os_release_path: PathBuf,
}

impl HttpStatusSource {
    /// Create a source querying `api_url` for the version in `/etc/os-release`
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| EolError::http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            os_release_path: default_os_release_path(),
        })
    }

    /// Read the version from a different os-release file
    pub fn with_os_release_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.os_release_path = path.into();
        self
    }

}

impl StatusSource for HttpStatusSource {
    fn eol_status(&self) -> Result<bool> {
        let version = read_version_id(&self.os_release_path)?;
        fetch_eol_status(&self.client, &self.api_url, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_count(server: &MockServer, version: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/rest_api/v1/releases/"))
            .and(query_param("active", "true"))
            .and(query_param("version", version))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn releases_url(server: &MockServer) -> String {
        format!("{}/rest_api/v1/releases/", server.uri())
    }

    // The blocking client owns a runtime of its own, so it must be created,
    // used and dropped off the async test thread.
    async fn fetch(api_url: String, version: u32) -> Result<bool> {
        tokio::task::spawn_blocking(move || {
            let client = Client::new();
            fetch_eol_status(&client, &api_url, version)
        })
        .await
        .unwrap()
    }

    #[test]
    fn query_url_appends_filters() {
        let url = build_query_url("https://pdc.fedoraproject.org/rest_api/v1/releases/", 30).unwrap();
        assert_eq!(
            url.as_str(),
            "https://pdc.fedoraproject.org/rest_api/v1/releases/?active=true&version=30"
        );
    }

    #[test]
    fn query_url_keeps_existing_query() {
        let url = build_query_url("https://example.org/releases?format=json", 7).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.org/releases?format=json&active=true&version=7"
        );
    }

    #[test]
    fn query_url_rejects_garbage() {
        assert!(matches!(
            build_query_url("not a url", 30),
            Err(EolError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn parse_count_values() {
        assert_eq!(parse_count(br#"{"count": 0}"#).unwrap(), 0);
        assert_eq!(parse_count(br#"{"count": 2, "results": []}"#).unwrap(), 2);
        assert_eq!(parse_count(br#"{"count": "3"}"#).unwrap(), 3);
    }

    #[test]
    fn parse_count_truncates_floats() {
        assert_eq!(parse_count(br#"{"count": 0.0}"#).unwrap(), 0);
        assert_eq!(parse_count(br#"{"count": 2.0}"#).unwrap(), 2);
        assert_eq!(parse_count(br#"{"count": 1.5}"#).unwrap(), 1);
        assert_eq!(parse_count(br#"{"count": 0.9}"#).unwrap(), 0);
    }

    #[test]
    fn parse_count_rejects_bad_payloads() {
        let bodies: [&[u8]; 6] = [
            b"",
            b"<html>502 Bad Gateway</html>",
            br#"{"results": []}"#,
            br#"{"count": null}"#,
            br#"{"count": "many"}"#,
            br#"[{"count": 0}]"#,
        ];
        for body in bodies {
            assert!(
                matches!(parse_count(body), Err(EolError::Payload(_))),
                "{:?} should be rejected",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn parse_count_rejects_invalid_utf8() {
        assert!(matches!(
            parse_count(&[0x7b, 0xff, 0xfe, 0x7d]),
            Err(EolError::Payload(_))
        ));
    }

    #[tokio::test]
    async fn zero_active_releases_is_eol() {
        let server = MockServer::start().await;
        mount_count(&server, "30", serde_json::json!({ "count": 0, "results": [] })).await;

        assert!(fetch(releases_url(&server), 30).await.unwrap());
    }

    #[tokio::test]
    async fn float_zero_count_is_eol() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest_api/v1/releases/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"count": 0.0}"#))
            .mount(&server)
            .await;

        assert!(fetch(releases_url(&server), 30).await.unwrap());
    }

    #[tokio::test]
    async fn active_releases_are_not_eol() {
        let server = MockServer::start().await;
        mount_count(&server, "39", serde_json::json!({ "count": 2 })).await;

        assert!(!fetch(releases_url(&server), 39).await.unwrap());
    }

    #[tokio::test]
    async fn repeated_lookups_agree() {
        let server = MockServer::start().await;
        mount_count(&server, "39", serde_json::json!({ "count": 1 })).await;

        let first = fetch(releases_url(&server), 39).await.unwrap();
        let second = fetch(releases_url(&server), 39).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn server_error_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(matches!(
            fetch(releases_url(&server), 30).await,
            Err(EolError::Http(_))
        ));
    }

    #[tokio::test]
    async fn not_found_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({ "count": 0 })))
            .mount(&server)
            .await;

        assert!(matches!(
            fetch(releases_url(&server), 30).await,
            Err(EolError::Http(_))
        ));
    }

    #[tokio::test]
    async fn malformed_json_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"count\": "))
            .mount(&server)
            .await;

        assert!(matches!(
            fetch(releases_url(&server), 30).await,
            Err(EolError::Payload(_))
        ));
    }

    #[tokio::test]
    async fn http_source_reads_version_then_queries() {
        let server = MockServer::start().await;
        mount_count(&server, "30", serde_json::json!({ "count": 0 })).await;

        let mut os_release = tempfile::NamedTempFile::new().unwrap();
        writeln!(os_release, "ID=fedora\nVERSION_ID=30").unwrap();

        let api_url = releases_url(&server);
        let path = os_release.path().to_path_buf();
        let eol = tokio::task::spawn_blocking(move || {
            HttpStatusSource::new(api_url)?
                .with_os_release_path(path)
                .eol_status()
        })
        .await
        .unwrap()
        .unwrap();

        assert!(eol);
    }

    #[tokio::test]
    async fn http_source_skips_request_without_version() {
        let server = MockServer::start().await;
        mount_count(&server, "30", serde_json::json!({ "count": 0 })).await;

        let dir = tempfile::tempdir().unwrap();
        let api_url = releases_url(&server);
        let path = dir.path().join("os-release");
        let result = tokio::task::spawn_blocking(move || {
            HttpStatusSource::new(api_url)?
                .with_os_release_path(path)
                .eol_status()
        })
        .await
        .unwrap();

        assert!(matches!(result, Err(EolError::OsRelease { .. })));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
