//! Gopher protocol implementation.
//!
//! A Gopher exchange is one line in, a menu out, and a closed socket.
//!
//! # Architecture
//!
//! - **`item`**: item type characters
//! - **`line`**: menu line model and its wire encoding
//! - **`parser`**: decodes request lines and menu lines
//! - **`request`**: the parsed request (selector path + optional query)
//! - **`context`**: per-request response writer with the semantic emitters
//!   handlers use (`info`, `directory`, `link`, `search`, ...)
//! - **`router`**: exact-path routing with a not-found fallback
//! - **`connection`**: drives one client connection through its lifecycle
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │    Idle     │ ← Accepted, waiting for the request line
//!        └──────┬──────┘
//!               │ First read
//!               ▼
//!        ┌──────────────────┐
//!        │     Parsing      │ ← Decode selector and query
//!        └──────┬───────────┘
//!               │ Request built
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Router runs the handler, lines go out
//!        └──────┬───────────┘
//!               │ Handler done (or failed)
//!               ▼
//!        ┌──────────────────┐
//!        │      Closed      │ ← Socket shut down, always
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use futures::FutureExt;
//! use hole::gopher::router::Router;
//!
//! let mut router = Router::new();
//! router.route("/", |ctx| async move {
//!     ctx.info("Hello from the hole").await?;
//!     ctx.directory("About", "/about").await
//! }.boxed());
//! ```

pub mod connection;
pub mod context;
pub mod item;
pub mod line;
pub mod parser;
pub mod request;
pub mod router;
