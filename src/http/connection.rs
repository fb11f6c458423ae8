use std::sync::Arc;

use bytes::{Buf, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{FrameError, ParseStatus, parse_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// One accepted connection and its buffered read cursor.
///
/// Owned exclusively by a single task for its entire lifetime. The buffer
/// survives across requests, so a pipelined second request already sitting
/// behind the first is consumed without another read.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    AwaitingRequest,
    Dispatching(Request),
    Sending(ResponseWriter, bool), // bool = close after send?
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Arc<Router>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            router,
            state: ConnectionState::AwaitingRequest,
        }
    }

    /// Runs the connection to completion: reads requests, dispatches them,
    /// writes responses, and loops until the peer is done or asks to close.
    ///
    /// Returns Ok on graceful end-of-stream; framing and write failures come
    /// back as errors after the connection has stopped (no response is sent
    /// for a request that could not be framed, since the stream position is
    /// no longer trustworthy).
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::AwaitingRequest => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Dispatching(req);
                        }
                        None => {
                            // Peer finished sending requests
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Dispatching(req) => {
                    let response = self.router.dispatch(req.route_key(), req).await;

                    let close = response.close || req.wants_close();
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Sending(writer, close);
                }

                ConnectionState::Sending(writer, close) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *close {
                        self.state = ConnectionState::Closed;
                    } else {
                        self.state = ConnectionState::AwaitingRequest; // next request
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads one request off the connection.
    ///
    /// Ok(None) is the normal "no more requests" signal: the stream ended
    /// before any byte of a new request arrived. End-of-stream mid-request
    /// is a real framing error.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try framing whatever is already buffered
            match parse_request(&self.buffer)? {
                ParseStatus::Complete { request, consumed } => {
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                status => {
                    // Need more data
                    let mut temp = [0u8; 1024];
                    let n = self.stream.read(&mut temp).await?;

                    if n == 0 {
                        if self.buffer.is_empty() {
                            return Ok(None);
                        }
                        let err = match status {
                            ParseStatus::NeedMoreBody => FrameError::TruncatedBody,
                            _ => FrameError::TruncatedHeaders,
                        };
                        return Err(err.into());
                    }

                    self.buffer.extend_from_slice(&temp[..n]);
                }
            }
        }
    }
}
