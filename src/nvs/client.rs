use super::*;
use reqwest::{StatusCode, Url};

/// Settings for talking to the explorer. Fixed once the client is built.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub table_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: EXPLORER_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            table_id: RESULT_TABLE_ID.to_string(),
        }
    }
}

/// What came back from a single lookup.
#[derive(Debug)]
pub enum SearchOutcome {
    /// The explorer answered 200 and the page was parsed; possibly no rows.
    Records(Vec<NvsRecord>),
    /// The explorer answered with something other than 200.
    Unavailable { status: StatusCode },
}

impl SearchOutcome {
    pub fn records(&self) -> &[NvsRecord] {
        match self {
            SearchOutcome::Records(records) => records,
            SearchOutcome::Unavailable { .. } => &[],
        }
    }

    pub fn into_records(self) -> Vec<NvsRecord> {
        match self {
            SearchOutcome::Records(records) => records,
            SearchOutcome::Unavailable { .. } => Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    table_id: String,
    client: reqwest::Client,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| Error::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl {
                url: config.base_url,
                reason: "cannot be used as a base".to_string(),
            });
        }
        let client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            base_url,
            table_id: config.table_id,
            client,
        })
    }

    /// Create a new client using a given base URL and the default
    /// user agent and timeout.
    pub fn new_with_base_url(base_url: String) -> Result<Self> {
        Self::new(ClientConfig {
            base_url,
            ..Default::default()
        })
    }

    /// Create a new client using a given base URL and request timeout
    /// in seconds.
    pub fn new_with_timeout(base_url: String, timeout: u64) -> Result<Self> {
        Self::new(ClientConfig {
            base_url,
            timeout: Duration::from_secs(timeout),
            ..Default::default()
        })
    }

    /// Append the query path to the base URL, one segment per field.
    /// `.` and `..` are refused: URL normalization would drop them and
    /// shift the remaining fields out of position.
    pub fn url_for(&self, path: &QueryPath) -> Result<Url> {
        if let Some(segment) = path.segments().find(|s| matches!(*s, "." | "..")) {
            return Err(Error::DotSegment {
                segment: segment.to_string(),
            });
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(path.segments());
        Ok(url)
    }

    /// Run one lookup: validate the query, GET the result page and extract
    /// its records. The query is checked before anything goes on the wire.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome> {
        let path = query.build()?;
        let url = self.url_for(&path)?;
        tracing::debug!("requesting {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("status code: {}", status.as_u16());
        if status != StatusCode::OK {
            return Ok(SearchOutcome::Unavailable { status });
        }

        let body = response.text().await?;
        Ok(SearchOutcome::Records(extract(&body, &self.table_id)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const PAGE: &str = "<html><body><table id=\"block_table\"><thead><tr><th>Type</th></tr></thead>\
        <tbody><tr><td>dns</td><td>dns:foo.coin</td><td></td><td>A=10.0.0.1</td><td></td>\
        <td>512000</td><td>2027-03-01</td></tr></tbody></table></body></html>";

    /// Answer exactly one request with `response`, handing back the raw request.
    async fn serve_once(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).to_string()
        });
        (format!("http://{}/nvs", addr), handle)
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    #[tokio::test]
    async fn test_search_records() {
        let (base_url, server) = serve_once(http_response("200 OK", PAGE)).await;
        let client = Client::new_with_timeout(base_url, 5).unwrap();
        let query = SearchQuery::new("foo", "").kind("dns").page_size(25u32);
        let outcome = client.search(&query).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /nvs/dns/foo//25/1/1 HTTP/1.1\r\n"));
        assert!(request
            .to_ascii_lowercase()
            .contains(&format!("user-agent: {}", USER_AGENT.to_ascii_lowercase())));

        let records = outcome.into_records();
        assert_eq!(
            records,
            vec![NvsRecord {
                kind: "dns".to_string(),
                name: "dns:foo.coin".to_string(),
                value: "A=10.0.0.1".to_string(),
                block: "512000".to_string(),
                expires: "2027-03-01".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_search_non_200_is_unavailable() {
        let (base_url, server) = serve_once(http_response("503 Service Unavailable", "")).await;
        let client = Client::new_with_base_url(base_url).unwrap();
        let outcome = client
            .search(&SearchQuery::new("", "bar"))
            .await
            .unwrap();
        server.await.unwrap();
        assert!(matches!(
            outcome,
            SearchOutcome::Unavailable { status } if status == StatusCode::SERVICE_UNAVAILABLE
        ));
        assert!(outcome.records().is_empty());
    }

    #[tokio::test]
    async fn test_search_page_without_table() {
        let (base_url, server) =
            serve_once(http_response("200 OK", "<html><body>maintenance</body></html>")).await;
        let client = Client::new_with_base_url(base_url).unwrap();
        let result = client.search(&SearchQuery::new("foo", "")).await;
        server.await.unwrap();
        assert!(matches!(
            result,
            Err(Error::Parse(ParseError::TableNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_invalid_search_sends_nothing() {
        // nothing listens on the discard port; a request would fail with a reqwest error
        let client = Client::new_with_base_url("http://127.0.0.1:9/nvs".to_string()).unwrap();
        let result = client.search(&SearchQuery::new("", "").kind("dns")).await;
        assert!(matches!(result, Err(Error::InvalidSearch)));
    }

    #[test]
    fn test_url_for_encodes_segments() {
        let client = Client::new_with_base_url("https://explorer.example/nvs/".to_string()).unwrap();
        let path = SearchQuery::new("a/b?c", "x y").build().unwrap();
        assert_eq!(
            client.url_for(&path).unwrap().as_str(),
            "https://explorer.example/nvs//a%2Fb%3Fc/x%20y/all/1/1"
        );
    }

    #[test]
    fn test_url_for_refuses_dot_segments() {
        let client = Client::new(ClientConfig::default()).unwrap();
        for (kind, name, value) in [("dns", "..", "x"), ("dns", ".", "x"), (".", "foo", ""), ("", "foo", "..")] {
            let path = SearchQuery::new(name, value).kind(kind).build().unwrap();
            assert!(matches!(
                client.url_for(&path),
                Err(Error::DotSegment { ref segment }) if segment == "." || segment == ".."
            ));
        }
        // dots inside a field are ordinary characters
        let path = SearchQuery::new("...", ".x").kind("dns").build().unwrap();
        assert_eq!(
            client.url_for(&path).unwrap().as_str(),
            "https://explorer.emercoin.com/nvs/dns/.../.x/all/1/1"
        );
    }

    #[tokio::test]
    async fn test_search_dot_segment_sends_nothing() {
        let client = Client::new_with_base_url("http://127.0.0.1:9/nvs".to_string()).unwrap();
        let result = client.search(&SearchQuery::new("..", "x").kind("dns")).await;
        assert!(matches!(result, Err(Error::DotSegment { .. })));
    }

    #[test]
    fn test_url_for_default_base() {
        let client = Client::new(ClientConfig::default()).unwrap();
        let path = SearchQuery::new("foo", "").kind("nvs").page_size(25u32).build().unwrap();
        assert_eq!(
            client.url_for(&path).unwrap().as_str(),
            "https://explorer.emercoin.com/nvs/nvs/foo//25/1/1"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            Client::new_with_base_url("not a url".to_string()),
            Err(Error::InvalidUrl { .. })
        ));
        assert!(matches!(
            Client::new_with_base_url("mailto:nvs@example.com".to_string()),
            Err(Error::InvalidUrl { .. })
        ));
    }
}
