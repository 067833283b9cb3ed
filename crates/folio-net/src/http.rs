//! Minimal HTTP GET client.
//!
//! Plain HTTP/1.0 over `std::net::TcpStream` with `Connection: close`, so the
//! body arrives unchunked and ends when the peer closes. HTTPS endpoints are
//! rejected; a hosting page with its own TLS stack fetches those itself and
//! hands the payload to [`crate::parse_joke`] directly.

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use folio_types::error::{FolioError, Result};

/// Maximum response size (joke payloads are tiny).
const MAX_RESPONSE_SIZE: usize = 64 * 1024;

/// TCP connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// TCP read timeout.
const READ_TIMEOUT: Duration = Duration::from_secs(15);

/// A parsed `http://` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub host: String,
    pub port: u16,
    /// Path plus query string, always starting with `/`.
    pub target: String,
}

impl Url {
    /// Parse an `http://` URL. Other schemes are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let rest = raw
            .strip_prefix("http://")
            .ok_or_else(|| FolioError::Net(format!("unsupported URL (http:// only): {raw}")))?;
        let (authority, target) = match rest.find('/') {
            Some(i) => (&rest[..i], rest[i..].to_string()),
            None => (rest, "/".to_string()),
        };
        if authority.is_empty() {
            return Err(FolioError::Net(format!("missing host: {raw}")));
        }
        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port_str)) => {
                let port = port_str
                    .parse::<u16>()
                    .map_err(|_| FolioError::Net(format!("bad port in URL: {raw}")))?;
                (host.to_string(), port)
            },
            None => (authority.to_string(), 80),
        };
        Ok(Self { host, port, target })
    }
}

fn build_request(url: &Url) -> String {
    format!(
        "GET {} HTTP/1.0\r\n\
         Host: {}\r\n\
         User-Agent: folio-term/0.1\r\n\
         Accept: application/json\r\n\
         Connection: close\r\n\
         \r\n",
        url.target, url.host,
    )
}

/// Perform an HTTP GET and return the response body on a 2xx status.
pub fn http_get(raw_url: &str) -> Result<Vec<u8>> {
    let url = Url::parse(raw_url)?;
    log::debug!("GET http://{}:{}{}", url.host, url.port, url.target);

    let addrs = (url.host.as_str(), url.port)
        .to_socket_addrs()
        .map_err(|e| FolioError::Net(format!("resolve {}: {e}", url.host)))?;
    let mut stream: Option<TcpStream> = None;
    let mut last_err: Option<std::io::Error> = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT) {
            Ok(s) => {
                stream = Some(s);
                break;
            },
            Err(e) => last_err = Some(e),
        }
    }
    let mut stream = stream.ok_or_else(|| match last_err {
        Some(e) => FolioError::Net(format!("connect {}: {e}", url.host)),
        None => FolioError::Net(format!("no addresses for {}", url.host)),
    })?;

    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    stream.write_all(build_request(&url).as_bytes())?;

    let mut response = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        response.extend_from_slice(&buf[..n]);
        if response.len() > MAX_RESPONSE_SIZE {
            return Err(FolioError::Net("response too large".to_string()));
        }
    }

    split_body(&response)
}

/// Strip the status line and headers, checking for a 2xx status code.
fn split_body(response: &[u8]) -> Result<Vec<u8>> {
    let header_end = find_subsequence(response, b"\r\n\r\n")
        .ok_or_else(|| FolioError::Net("malformed HTTP response".to_string()))?;
    let head = std::str::from_utf8(&response[..header_end])
        .map_err(|_| FolioError::Net("non-UTF-8 response headers".to_string()))?;
    let status_line = head.lines().next().unwrap_or("");
    let code = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse::<u16>().ok())
        .ok_or_else(|| FolioError::Net(format!("bad status line: {status_line}")))?;
    if !(200..300).contains(&code) {
        return Err(FolioError::Net(format!("HTTP status {code}")));
    }
    Ok(response[header_end + 4..].to_vec())
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
