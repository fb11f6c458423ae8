//! Request routing
//!
//! Maps a route key (the first path segment) to a registered handler. The
//! table is built once at startup and shared read-only by every connection
//! task, so dispatch needs no locking. Deriving the route key from the path
//! is the connection loop's job; the router never inspects the full path.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Boxed future returned by handler dispatch.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Response> + Send + 'a>>;

/// A route handler.
///
/// Receives an immutable request and produces a response. Handlers must map
/// every underlying failure (e.g. filesystem errors) to a response with an
/// appropriate status rather than propagating a raw fault to the connection
/// loop.
pub trait Handler: Send + Sync {
    fn handle<'a>(&'a self, req: &'a Request) -> HandlerFuture<'a>;
}

/// Maps route keys to handlers, with a default 404 for everything else.
pub struct Router {
    routes: HashMap<String, Box<dyn Handler>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registers a handler for a route key. The last registration for a key
    /// wins; key shape is not validated.
    pub fn register(&mut self, key: impl Into<String>, handler: impl Handler + 'static) {
        self.routes.insert(key.into(), Box::new(handler));
    }

    /// Dispatches a request to the handler registered for `route_key`,
    /// returning its response unmodified. Unregistered keys get a
    /// 404 Not Found with an empty body, mirroring the request's
    /// `Connection: close` into the response.
    pub async fn dispatch(&self, route_key: &str, req: &Request) -> Response {
        match self.routes.get(route_key) {
            Some(handler) => handler.handle(req).await,
            None => ResponseBuilder::new(StatusCode::NotFound)
                .close(req.wants_close())
                .build(),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
