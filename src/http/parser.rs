use crate::http::request::{Method, Request};
use std::collections::HashMap;

/// Framing failures that terminate the connection.
///
/// End-of-stream before a new request starts is not represented here: it is
/// the normal "no more requests" signal and surfaces as `Ok(None)` from the
/// connection's read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Request line had fewer than three whitespace-separated fields,
    /// or was not valid UTF-8.
    MalformedRequestLine,
    /// Content-Length was not a non-negative decimal integer.
    InvalidContentLength,
    /// The stream ended before the header section was complete.
    TruncatedHeaders,
    /// The stream ended before Content-Length bytes of body arrived.
    TruncatedBody,
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            FrameError::MalformedRequestLine => "malformed request line",
            FrameError::InvalidContentLength => "invalid Content-Length",
            FrameError::TruncatedHeaders => "stream ended mid-headers",
            FrameError::TruncatedBody => "stream ended mid-body",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for FrameError {}

/// Outcome of a parse attempt over the bytes buffered so far.
#[derive(Debug)]
pub enum ParseStatus {
    /// One full request was framed; `consumed` bytes belong to it.
    Complete { request: Request, consumed: usize },
    /// The header section (request line included) is not complete yet.
    NeedMoreHeaders,
    /// Headers are complete but fewer than Content-Length body bytes
    /// are buffered.
    NeedMoreBody,
}

/// Attempts to frame one HTTP request from the start of `buf`.
///
/// The request line is split on runs of whitespace into method, path, and
/// version; fewer than three fields is an error, extra fields are ignored.
/// Header lines are split on the first `:`, trimmed on both sides, and the
/// name lowercased; a line with no `:` is silently skipped (tolerant
/// parsing, mirroring real-world leniency). Lines may end in `\r\n` or a
/// bare `\n`.
///
/// A body is read only when a Content-Length header is present; a chunked
/// Transfer-Encoding without Content-Length yields an empty body (known
/// limitation, chunked bodies are unsupported).
pub fn parse_request(buf: &[u8]) -> Result<ParseStatus, FrameError> {
    let mut pos = 0;

    // Request line
    let (line, used) = match take_line(&buf[pos..]) {
        Some(x) => x,
        None => return Ok(ParseStatus::NeedMoreHeaders),
    };
    pos += used;

    let line = std::str::from_utf8(line).map_err(|_| FrameError::MalformedRequestLine)?;
    let mut fields = line.split_whitespace();
    let (method, path, version) = match (fields.next(), fields.next(), fields.next()) {
        (Some(m), Some(p), Some(v)) => (m, p, v),
        _ => return Err(FrameError::MalformedRequestLine),
    };

    // Headers, until an empty line
    let mut headers = HashMap::new();
    loop {
        let (line, used) = match take_line(&buf[pos..]) {
            Some(x) => x,
            None => return Ok(ParseStatus::NeedMoreHeaders),
        };
        pos += used;

        if line.is_empty() {
            break;
        }

        // Skipped rather than rejected: lines without a ':' and lines that
        // are not UTF-8 are tolerated.
        let Ok(line) = std::str::from_utf8(line) else {
            continue;
        };
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(
                key.trim().to_ascii_lowercase(),
                value.trim().to_string(),
            );
        }
    }

    // Body
    let content_length = headers
        .get("content-length")
        .map(|v| v.parse::<usize>().map_err(|_| FrameError::InvalidContentLength))
        .transpose()?
        .unwrap_or(0);

    if buf.len() - pos < content_length {
        return Ok(ParseStatus::NeedMoreBody);
    }

    let body = buf[pos..pos + content_length].to_vec();

    let request = Request {
        method: Method::from_token(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    };

    Ok(ParseStatus::Complete {
        request,
        consumed: pos + content_length,
    })
}

/// Returns the next line (terminator stripped) and the byte count consumed
/// including the terminator, or None when no full line is buffered yet.
fn take_line(buf: &[u8]) -> Option<(&[u8], usize)> {
    let nl = buf.iter().position(|&b| b == b'\n')?;
    let line = match buf[..nl].last() {
        Some(&b'\r') => &buf[..nl - 1],
        _ => &buf[..nl],
    };
    Some((line, nl + 1))
}
