//! TCP listener that hands each accepted socket to a [`Connection`](crate::gopher::connection::Connection).

pub mod listener;

pub use listener::Server;
