//! `/echo/<text>` handler with gzip content negotiation.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::handlers::bad_request;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::router::{Handler, HandlerFuture};

pub struct EchoHandler;

impl Handler for EchoHandler {
    fn handle<'a>(&'a self, req: &'a Request) -> HandlerFuture<'a> {
        Box::pin(async move { echo(req) })
    }
}

fn echo(req: &Request) -> Response {
    // "/echo/<text>": the single segment after "/echo/" is echoed back
    let Some(text) = req.path.split('/').nth(2) else {
        return bad_request(req);
    };

    let compress = accepts_gzip(req);

    let body = if compress {
        match gzip(text.as_bytes()) {
            Ok(compressed) => compressed,
            Err(e) => {
                tracing::error!("gzip compression failed: {}", e);
                return ResponseBuilder::new(StatusCode::InternalServerError)
                    .close(req.wants_close())
                    .build();
            }
        }
    } else {
        text.as_bytes().to_vec()
    };

    let mut builder = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(body)
        .close(req.wants_close());

    if compress {
        builder = builder.header("Content-Encoding", "gzip");
    }

    builder.build()
}

/// Whether the client's Accept-Encoding list contains gzip. The header
/// value is a comma-separated list of tokens.
fn accepts_gzip(req: &Request) -> bool {
    req.header("Accept-Encoding")
        .map(|enc| enc.split(',').any(|token| token.trim() == "gzip"))
        .unwrap_or(false)
}

fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
