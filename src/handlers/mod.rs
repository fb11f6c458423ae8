//! Route handlers
//!
//! Each handler receives an immutable request and returns a complete
//! response, mapping any I/O failure to a 500-class status instead of
//! propagating it to the connection loop. All handlers mirror the client's
//! `Connection: close` into the response they build.

pub mod echo;
pub mod files;

use crate::config::Config;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::router::{Handler, HandlerFuture, Router};

pub use echo::EchoHandler;
pub use files::FileHandler;

/// Builds the route table served by every connection.
pub fn build_router(cfg: &Config) -> Router {
    let mut router = Router::new();
    router.register("", RootHandler);
    router.register("echo", EchoHandler);
    router.register("user-agent", UserAgentHandler);
    router.register("files", FileHandler::new(cfg.directory.clone()));
    router
}

/// `/` - 200 OK with an empty body.
pub struct RootHandler;

impl Handler for RootHandler {
    fn handle<'a>(&'a self, req: &'a Request) -> HandlerFuture<'a> {
        Box::pin(async move {
            ResponseBuilder::new(StatusCode::Ok)
                .close(req.wants_close())
                .build()
        })
    }
}

/// `/user-agent` - echoes the inbound User-Agent header value.
pub struct UserAgentHandler;

impl Handler for UserAgentHandler {
    fn handle<'a>(&'a self, req: &'a Request) -> HandlerFuture<'a> {
        Box::pin(async move {
            let user_agent = req.header("User-Agent").unwrap_or("");

            ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", "text/plain")
                .body(user_agent.as_bytes().to_vec())
                .close(req.wants_close())
                .build()
        })
    }
}

/// 400 Bad Request for paths missing their segment (e.g. bare `/echo`).
pub(crate) fn bad_request(req: &Request) -> Response {
    ResponseBuilder::new(StatusCode::BadRequest)
        .close(req.wants_close())
        .build()
}
