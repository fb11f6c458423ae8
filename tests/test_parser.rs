use ember::http::parser::{FrameError, ParseStatus, parse_request};
use ember::http::request::Method;

fn complete(buf: &[u8]) -> (ember::http::request::Request, usize) {
    match parse_request(buf).unwrap() {
        ParseStatus::Complete { request, consumed } => (request, consumed),
        other => panic!("expected a complete request, got {:?}", other),
    }
}

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = complete(req);

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header("Host").unwrap(), "example.com");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /api HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let (parsed, consumed) = complete(req);

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.path, "/api");
    assert_eq!(parsed.body, b"hello".to_vec());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let (parsed, _) = complete(req);

    assert_eq!(parsed.header("Host").unwrap(), "example.com");
    assert_eq!(parsed.header("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.header("Accept").unwrap(), "*/*");
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /search?q=rust HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, _) = complete(req);

    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let result = parse_request(req).unwrap();

    assert!(matches!(result, ParseStatus::NeedMoreHeaders));
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";
    let result = parse_request(req).unwrap();

    assert!(matches!(result, ParseStatus::NeedMoreBody));
}

#[test]
fn test_parse_exact_content_length_body() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 10\r\n\r\n0123456789";
    let (parsed, consumed) = complete(req);

    assert_eq!(parsed.body.len(), 10);
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_request_line_with_too_few_fields() {
    let req = b"GET /\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(FrameError::MalformedRequestLine)));
}

#[test]
fn test_parse_request_line_extra_fields_ignored() {
    let req = b"GET / HTTP/1.1 junk\r\nHost: x\r\n\r\n";
    let (parsed, _) = complete(req);

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_unknown_method_is_preserved() {
    let req = b"BREW /pot HTTP/1.1\r\n\r\n";
    let (parsed, _) = complete(req);

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
}

#[test]
fn test_parse_invalid_content_length() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: abc\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(FrameError::InvalidContentLength)));
}

#[test]
fn test_parse_negative_content_length() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: -5\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(FrameError::InvalidContentLength)));
}

#[test]
fn test_parse_header_line_without_colon_is_skipped() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: example.com\r\n\r\n";
    let (parsed, _) = complete(req);

    assert_eq!(parsed.header("Host").unwrap(), "example.com");
    assert_eq!(parsed.headers.len(), 1);
}

#[test]
fn test_parse_non_utf8_header_line_is_skipped() {
    let req = b"GET / HTTP/1.1\r\nX-Bad: \xff\xfe\xfd\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = complete(req);

    assert_eq!(parsed.header("Host").unwrap(), "example.com");
    assert!(parsed.header("X-Bad").is_none());
    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_bare_lf_line_endings() {
    let req = b"GET / HTTP/1.1\nHost: example.com\n\n";
    let (parsed, consumed) = complete(req);

    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.header("Host").unwrap(), "example.com");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_header_names_are_lowercased() {
    let req = b"GET / HTTP/1.1\r\nContent-Type: application/json\r\n\r\n";
    let (parsed, _) = complete(req);

    assert!(parsed.headers.contains_key("content-type"));
    assert_eq!(parsed.header("CONTENT-TYPE").unwrap(), "application/json");
}

#[test]
fn test_parse_duplicate_header_last_write_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Tag: first\r\nX-Tag: second\r\n\r\n";
    let (parsed, _) = complete(req);

    assert_eq!(parsed.header("X-Tag").unwrap(), "second");
}

#[test]
fn test_parse_request_with_empty_body() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
    let (parsed, _) = complete(req);

    assert_eq!(parsed.body.len(), 0);
}

#[test]
fn test_parse_request_with_binary_body() {
    let req = b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03";
    let (parsed, _) = complete(req);

    assert_eq!(parsed.body, vec![0, 1, 2, 3]);
}

#[test]
fn test_parse_chunked_without_content_length_reads_empty_body() {
    // Chunked bodies are unsupported; the request parses with no body.
    let req = b"POST /api HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n";
    let (parsed, consumed) = complete(req);

    assert!(parsed.body.is_empty());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_pipelined_requests_sequentially() {
    let first = b"GET /a HTTP/1.1\r\n\r\n".to_vec();
    let second = b"GET /b HTTP/1.1\r\n\r\n".to_vec();
    let mut buf = first.clone();
    buf.extend_from_slice(&second);

    let (parsed, consumed) = complete(&buf);
    assert_eq!(parsed.path, "/a");
    assert_eq!(consumed, first.len());

    let (parsed, consumed) = complete(&buf[first.len()..]);
    assert_eq!(parsed.path, "/b");
    assert_eq!(consumed, second.len());
}

#[test]
fn test_parse_header_value_with_colons() {
    // Only the first ':' splits name from value
    let req = b"GET / HTTP/1.1\r\nHost: localhost:8080\r\n\r\n";
    let (parsed, _) = complete(req);

    assert_eq!(parsed.header("Host").unwrap(), "localhost:8080");
}
