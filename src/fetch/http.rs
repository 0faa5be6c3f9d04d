//! HTTP name fetching.
//!
//! Provides an HTTP client for the names page with support for ETag-based
//! conditional requests.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

use super::page::extract_names;
use super::{FetchOutcome, NameSource};
use crate::error::NamnsdagError;
use crate::names::sort_names;

/// Response from fetching the names page.
#[derive(Debug)]
pub struct FetchResponse {
    /// The page content.
    pub content: String,
    /// ETag header if present.
    pub etag: Option<String>,
}

/// Fetches names over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(30))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("namnsdag/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch with conditional request (If-None-Match).
    ///
    /// Returns `None` if content unchanged (304 Not Modified).
    pub fn fetch_if_changed(&self, etag: Option<&str>) -> Result<Option<FetchResponse>> {
        let mut request = self.client.get(&self.url);

        if let Some(etag) = etag {
            request = request.header("If-None-Match", etag);
        }

        let response = request.send()?;

        if response.status() == reqwest::StatusCode::NOT_MODIFIED {
            return Ok(None);
        }

        if !response.status().is_success() {
            bail!("non-2xx status code: HTTP {}", response.status());
        }

        let new_etag = response
            .headers()
            .get("etag")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let content = response.text()?;

        Ok(Some(FetchResponse {
            content,
            etag: new_etag,
        }))
    }

    fn fetch_outcome(&self, etag: Option<&str>) -> Result<FetchOutcome> {
        let Some(response) = self.fetch_if_changed(etag)? else {
            return Ok(FetchOutcome::NotModified);
        };

        let mut names = extract_names(&response.content)?;
        sort_names(&mut names);
        debug!("Fetched {} names from {}", names.len(), self.url);

        Ok(FetchOutcome::Fetched {
            names,
            etag: response.etag.unwrap_or_default(),
        })
    }
}

impl NameSource for HttpFetcher {
    fn fetch(&self, etag: Option<&str>) -> FetchOutcome {
        debug!("GET {} (If-None-Match: {:?})", self.url, etag);

        self.fetch_outcome(etag).unwrap_or_else(|e| {
            FetchOutcome::Failed(NamnsdagError::Fetch {
                url: self.url.clone(),
                message: format!("{:#}", e),
            })
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const PAGE: &str = r#"<html><body><script id="__NEXT_DATA__" type="application/json">
{"props":{"pageProps":{"names":[
  {"url":"/namn/sven","name":"Sven","day":2,"month":1,"typeOfName":"NAME","gender":"BOY"},
  {"url":"/namn/erik","name":"Erik","day":1,"month":1,"typeOfName":"NAME","gender":"BOY"},
  {"url":"/namn/nya","name":"Nyå","day":1,"month":1,"typeOfName":"NEW_NAME","gender":"BOTH"}
]}}}
</script></body></html>"#;

    #[test]
    fn describes_itself_by_url() {
        let fetcher = HttpFetcher::new("https://example.com").unwrap();
        assert_eq!(fetcher.describe(), "https://example.com");
    }

    #[test]
    fn slow_server_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/namnsdagar");
            then.status(200)
                .body(PAGE)
                .delay(Duration::from_secs(2));
        });
        let fetcher =
            HttpFetcher::with_timeout(server.url("/namnsdagar"), Duration::from_millis(200))
                .unwrap();

        assert!(matches!(
            fetcher.fetch(None),
            FetchOutcome::Failed(NamnsdagError::Fetch { .. })
        ));
    }

    #[test]
    fn fetches_and_sorts_names_with_etag() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/namnsdagar");
            then.status(200).header("ETag", "\"v1\"").body(PAGE);
        });

        let fetcher = HttpFetcher::new(server.url("/namnsdagar")).unwrap();
        match fetcher.fetch(None) {
            FetchOutcome::Fetched { names, etag } => {
                assert_eq!(etag, "\"v1\"");
                let order: Vec<_> = names.iter().map(|n| n.name.as_str()).collect();
                assert_eq!(order, vec!["Erik", "Nyå", "Sven"]);
            }
            other => panic!("expected Fetched, got {:?}", other),
        }
    }

    #[test]
    fn missing_etag_header_gives_empty_token() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/namnsdagar");
            then.status(200).body(PAGE);
        });

        let fetcher = HttpFetcher::new(server.url("/namnsdagar")).unwrap();
        match fetcher.fetch(None) {
            FetchOutcome::Fetched { etag, .. } => assert!(etag.is_empty()),
            other => panic!("expected Fetched, got {:?}", other),
        }
    }

    #[test]
    fn sends_if_none_match_and_maps_304() {
        let server = MockServer::start();
        let conditional = server.mock(|when, then| {
            when.method(GET)
                .path("/namnsdagar")
                .header("If-None-Match", "\"v1\"");
            then.status(304);
        });

        let fetcher = HttpFetcher::new(server.url("/namnsdagar")).unwrap();
        let outcome = fetcher.fetch(Some("\"v1\""));

        assert!(matches!(outcome, FetchOutcome::NotModified));
        conditional.assert();
    }

    #[test]
    fn server_error_is_a_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/namnsdagar");
            then.status(500).body("Internal Server Error");
        });

        let fetcher = HttpFetcher::new(server.url("/namnsdagar")).unwrap();
        match fetcher.fetch(None) {
            FetchOutcome::Failed(err) => {
                let msg = err.to_string();
                assert!(msg.contains("500"), "Error should mention 500: {}", msg);
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn page_without_data_is_a_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/namnsdagar");
            then.status(200).body("<html></html>");
        });

        let fetcher = HttpFetcher::new(server.url("/namnsdagar")).unwrap();
        assert!(matches!(fetcher.fetch(None), FetchOutcome::Failed(_)));
    }

    #[test]
    fn connection_refused_is_a_failure() {
        // Nothing listens on port 9 of localhost in the test environment.
        let fetcher =
            HttpFetcher::with_timeout("http://127.0.0.1:9/", Duration::from_secs(2)).unwrap();
        assert!(matches!(fetcher.fetch(None), FetchOutcome::Failed(_)));
    }
}
