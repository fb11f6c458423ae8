//! Listener/acceptor: binds the socket and spawns one connection task per
//! accepted client.

pub mod listener;
