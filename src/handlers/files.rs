//! `/files/<name>` handler: POST writes the request body to a file under
//! the configured directory, any other method reads the file back.
//!
//! Many connection tasks may touch the same file concurrently; writes are
//! not serialized and last-writer-wins is acceptable here.

use std::path::{Path, PathBuf};

use crate::handlers::bad_request;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::router::{Handler, HandlerFuture};

pub struct FileHandler {
    directory: PathBuf,
}

impl FileHandler {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    async fn serve(&self, req: &Request) -> Response {
        // "/files/<name>"; the name may itself contain '/' separators
        let Some(name) = req.path.splitn(3, '/').nth(2) else {
            return bad_request(req);
        };
        let path = self.directory.join(name);

        if req.method == Method::POST {
            self.write_file(req, &path).await
        } else {
            self.read_file(req, &path).await
        }
    }

    async fn write_file(&self, req: &Request, path: &Path) -> Response {
        match tokio::fs::write(path, &req.body).await {
            Ok(()) => ResponseBuilder::new(StatusCode::Created)
                .close(req.wants_close())
                .build(),
            Err(e) => {
                tracing::error!("failed to write {}: {}", path.display(), e);
                ResponseBuilder::new(StatusCode::InternalServerError)
                    .close(req.wants_close())
                    .build()
            }
        }
    }

    async fn read_file(&self, req: &Request, path: &Path) -> Response {
        match tokio::fs::read(path).await {
            Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", "application/octet-stream")
                .body(contents)
                .close(req.wants_close())
                .build(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ResponseBuilder::new(StatusCode::NotFound)
                    .close(req.wants_close())
                    .build()
            }
            Err(e) => {
                tracing::error!("failed to read {}: {}", path.display(), e);
                ResponseBuilder::new(StatusCode::InternalServerError)
                    .close(req.wants_close())
                    .build()
            }
        }
    }
}

impl Handler for FileHandler {
    fn handle<'a>(&'a self, req: &'a Request) -> HandlerFuture<'a> {
        Box::pin(self.serve(req))
    }
}
