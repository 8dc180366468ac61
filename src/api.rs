//! Synchronous client for the movie revenue dataset.
//!
//! The dataset is a single JSON document shaped like [`DatasetNode`]. Fetching is
//! the first stage of the render pipeline: its outcome is a typed
//! [`Result<DatasetNode, FetchError>`] and nothing is drawn unless it succeeds.
//!
//! ### Notes
//! - Revenue values arrive as numeric strings; the model accepts both forms.
//! - Transient failures (network errors, HTTP 5xx) are retried with a short backoff.
//!
//! Typical usage:
//! ```no_run
//! # use movie_treemap::Client;
//! let client = Client::default();
//! let dataset = client.fetch()?;
//! println!("{} movies", dataset.leaf_count());
//! # Ok::<(), movie_treemap::api::FetchError>(())
//! ```
use crate::models::{DatasetError, DatasetNode};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Public movie revenue dataset (top 100 grossing movies by genre).
pub const DEFAULT_DATA_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/movie-data.json";

/// Outcome of the fetch stage.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed with HTTP {0}")]
    Status(u16),
    #[error("decode json: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dataset: {0}")]
    Invalid(#[from] DatasetError),
    #[error("giving up after {attempts} attempts against {url}: {last}")]
    Exhausted {
        url: String,
        attempts: usize,
        last: String,
    },
}

#[derive(Debug, Clone)]
pub struct Client {
    pub url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_url(DEFAULT_DATA_URL)
    }
}

/// Delays before each retry; one initial attempt plus one retry per entry.
const BACKOFF_MS: [u64; 3] = [100, 300, 700];

impl Client {
    /// Client pointed at a custom dataset URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("movie-treemap/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            url: url.into(),
            http,
        }
    }

    /// Fetch and validate the dataset.
    ///
    /// ### Errors
    /// - Network/HTTP error (after retries for 5xx and connection failures)
    /// - Non-success status other than 5xx (no retry)
    /// - JSON decoding error
    /// - Dataset validation error
    pub fn fetch(&self) -> Result<DatasetNode, FetchError> {
        let mut last = String::new();
        let attempts = BACKOFF_MS.len() + 1;
        for attempt in 0..attempts {
            if attempt > 0 {
                std::thread::sleep(Duration::from_millis(BACKOFF_MS[attempt - 1]));
            }
            match self.http.get(&self.url).send() {
                Ok(r) if r.status().is_success() => {
                    let body = r.text()?;
                    return parse_dataset(&body);
                }
                Ok(r) if r.status().is_server_error() => {
                    log::warn!(
                        "GET {} -> {} (attempt {}/{})",
                        self.url,
                        r.status(),
                        attempt + 1,
                        attempts
                    );
                    last = format!("status {}", r.status().as_u16());
                }
                Ok(r) => return Err(FetchError::Status(r.status().as_u16())),
                Err(e) => {
                    log::warn!(
                        "GET {} failed: {} (attempt {}/{})",
                        self.url,
                        e,
                        attempt + 1,
                        attempts
                    );
                    last = e.to_string();
                }
            }
        }
        Err(FetchError::Exhausted {
            url: self.url.clone(),
            attempts,
            last,
        })
    }
}

/// Decode and validate a dataset document.
pub fn parse_dataset(json: &str) -> Result<DatasetNode, FetchError> {
    let root: DatasetNode = serde_json::from_str(json)?;
    root.validate()?;
    Ok(root)
}

/// Load the dataset from a local JSON file instead of the network.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<DatasetNode, FetchError> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_dataset(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    #[test]
    fn parse_rejects_negative_values() {
        let json = r#"{"name":"root","children":[{"name":"X","category":"Drama","value":-3}]}"#;
        match parse_dataset(json) {
            Err(FetchError::Invalid(DatasetError::InvalidValue { name, .. })) => {
                assert_eq!(name, "X")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parse_surfaces_malformed_json() {
        assert!(matches!(
            parse_dataset("{\"name\": 3"),
            Err(FetchError::Decode(_))
        ));
    }

    /// Answer every connection with `status` and count the requests.
    fn status_server(status: &'static str) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/movie-data.json", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut line = String::new();
                while reader.read_line(&mut line).unwrap_or(0) > 0 && line != "\r\n" {
                    line.clear();
                }
                counter.fetch_add(1, Ordering::SeqCst);
                let _ = write!(
                    stream,
                    "HTTP/1.1 {status}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                );
            }
        });
        (url, hits)
    }

    #[test]
    fn server_errors_are_retried_three_times() {
        let (url, hits) = status_server("503 Service Unavailable");
        let started = Instant::now();
        match Client::with_url(url).fetch() {
            Err(FetchError::Exhausted { attempts, last, .. }) => {
                assert_eq!(attempts, 4);
                assert_eq!(last, "status 503");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 4);
        // 100 + 300 + 700 ms between attempts, nothing after the last one
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1100), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1750), "{elapsed:?}");
    }

    #[test]
    fn client_errors_are_not_retried() {
        let (url, hits) = status_server("404 Not Found");
        assert!(matches!(
            Client::with_url(url).fetch(),
            Err(FetchError::Status(404))
        ));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_dataset("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
