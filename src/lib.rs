//! Hole - a small Gopher server
//!
//! Core library for the Gopher protocol, routing and the example site.

pub mod config;
pub mod gopher;
pub mod server;
pub mod site;
