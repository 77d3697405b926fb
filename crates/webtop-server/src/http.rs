//! Minimal HTTP/1.1 framing: one request in, one response out, then the
//! connection closes.

use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Largest request line plus headers we are willing to buffer.
pub const MAX_HEAD_BYTES: usize = 16 * 1024;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Sent on every response so the desktop can be previewed cross-origin.
const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("connection closed mid-request")]
    Incomplete,
    #[error("malformed request: {0}")]
    Malformed(String),
    #[error("request head exceeds {MAX_HEAD_BYTES} bytes")]
    HeadTooLarge,
    #[error("request body of {length} bytes exceeds the {limit} byte limit")]
    BodyTooLarge { length: usize, limit: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HttpError {
    /// Status to answer with, or `None` when the peer is gone and no reply
    /// can be sent.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Malformed(_) | HttpError::HeadTooLarge => Some(400),
            HttpError::BodyTooLarge { .. } => Some(413),
            HttpError::Incomplete | HttpError::Io(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Options,
    Other(String),
}

impl Method {
    fn parse(token: &str) -> Self {
        match token {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            "OPTIONS" => Method::Options,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Options => "OPTIONS",
            Method::Other(token) => token,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Request target exactly as sent, query string included.
    pub target: String,
    /// `target` with any query string or fragment removed.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Request {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub content_type: Option<&'static str>,
    /// Advertised length; differs from `body.len()` only for HEAD replies.
    pub content_length: usize,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: Some(content_type),
            content_length: body.len(),
            body,
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            content_length: 0,
            body: Vec::new(),
        }
    }

    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::new(status, JSON_CONTENT_TYPE, body),
            Err(e) => {
                tracing::error!("failed to encode JSON reply: {e}");
                Self::empty(500)
            }
        }
    }

    /// Keep the headers of a GET reply but send no body.
    pub fn without_body(mut self) -> Self {
        self.body.clear();
        self
    }
}

pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        413 => "Payload Too Large",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        _ => "Unknown",
    }
}

/// Read one request: the head up to the blank line, then exactly
/// `Content-Length` body bytes.
pub async fn read_request<R>(reader: &mut R, max_body: usize) -> Result<Request, HttpError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0_u8; 2048];

    let head_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        if buf.len() > MAX_HEAD_BYTES {
            return Err(HttpError::HeadTooLarge);
        }
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Err(HttpError::Incomplete);
        }
        buf.extend_from_slice(&chunk[..n]);
    };
    if head_end > MAX_HEAD_BYTES {
        return Err(HttpError::HeadTooLarge);
    }

    let head = std::str::from_utf8(&buf[..head_end])
        .map_err(|_| HttpError::Malformed("request head is not UTF-8".into()))?;
    let (method, target, headers) = parse_head(head)?;

    let mut request = Request {
        method,
        path: strip_query(&target).to_string(),
        target,
        headers,
        body: Vec::new(),
    };

    if request.header("transfer-encoding").is_some() {
        return Err(HttpError::Malformed(
            "chunked request bodies are not supported".into(),
        ));
    }
    let length = match request.header("content-length") {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| HttpError::Malformed(format!("bad Content-Length {raw:?}")))?,
        None => 0,
    };
    if length > max_body {
        return Err(HttpError::BodyTooLarge {
            length,
            limit: max_body,
        });
    }

    let mut body = buf.split_off(head_end + 4);
    body.truncate(length);
    if body.len() < length {
        let already = body.len();
        body.resize(length, 0);
        reader
            .read_exact(&mut body[already..])
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::UnexpectedEof => HttpError::Incomplete,
                _ => HttpError::Io(e),
            })?;
    }
    request.body = body;
    Ok(request)
}

type Head = (Method, String, Vec<(String, String)>);

fn strip_query(target: &str) -> &str {
    target.split(['?', '#']).next().unwrap_or_default()
}

fn parse_head(head: &str) -> Result<Head, HttpError> {
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();

    let mut parts = request_line.split(' ').filter(|p| !p.is_empty());
    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(HttpError::Malformed(format!(
            "bad request line {request_line:?}"
        )));
    };
    if !version.starts_with("HTTP/1.") {
        return Err(HttpError::Malformed(format!("unsupported version {version}")));
    }
    if !target.starts_with('/') {
        return Err(HttpError::Malformed(format!("bad request target {target:?}")));
    }

    let mut headers = Vec::new();
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            return Err(HttpError::Malformed(format!("bad header line {line:?}")));
        };
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    Ok((Method::parse(method), target.to_string(), headers))
}

/// Write `response` with CORS headers and `Connection: close`.
pub async fn write_response<W>(writer: &mut W, response: &Response) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut head = format!(
        "HTTP/1.1 {} {}\r\n",
        response.status,
        reason_phrase(response.status)
    );
    if let Some(content_type) = response.content_type {
        head.push_str(&format!("Content-Type: {content_type}\r\n"));
    }
    // 204 replies must not advertise a length.
    if response.status != 204 {
        head.push_str(&format!("Content-Length: {}\r\n", response.content_length));
    }
    for (name, value) in CORS_HEADERS {
        head.push_str(&format!("{name}: {value}\r\n"));
    }
    head.push_str("Connection: close\r\n\r\n");

    writer.write_all(head.as_bytes()).await?;
    writer.write_all(&response.body).await?;
    writer.flush().await
}
