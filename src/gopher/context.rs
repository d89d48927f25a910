use std::sync::Arc;

use anyhow::Context as _;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::config::ServerConfig;
use crate::gopher::item::ItemType;
use crate::gopher::line::MenuLine;
use crate::gopher::request::Request;

/// Longest display text, in bytes, of a single informational line.
pub const INFO_WIDTH: usize = 70;

/// Port assumed for `gopher://` URLs without one.
pub const DEFAULT_GOPHER_PORT: u16 = 70;

type Sink = Box<dyn AsyncWrite + Send + Sync + Unpin>;

/// Everything a handler needs to answer one request.
///
/// Owns the request, the server's advertised host/port (used for local
/// links) and the write side of the connection. Each emitter writes its line
/// straight to the connection, so lines appear on the wire in call order.
pub struct Context {
    request: Request,
    server: Arc<ServerConfig>,
    sink: Sink,
}

impl Context {
    pub fn new<W>(request: Request, server: Arc<ServerConfig>, sink: W) -> Self
    where
        W: AsyncWrite + Send + Sync + Unpin + 'static,
    {
        Self {
            request,
            server,
            sink: Box::new(sink),
        }
    }

    /// The normalized selector path.
    pub fn path(&self) -> &str {
        &self.request.path
    }

    pub fn query(&self) -> Option<&str> {
        self.request.query()
    }

    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Writes one menu line.
    pub async fn line(&mut self, line: &MenuLine) -> anyhow::Result<()> {
        self.sink.write_all(&line.encode()).await?;
        Ok(())
    }

    /// Informational text.
    ///
    /// Every newline starts a new line, and lines longer than
    /// [`INFO_WIDTH`] bytes are cut into chunks. An empty string still
    /// produces one (blank) line.
    pub async fn info(&mut self, text: &str) -> anyhow::Result<()> {
        for segment in text.split('\n') {
            for chunk in wrap(segment, INFO_WIDTH) {
                self.line(&MenuLine::new(ItemType::Info, chunk)).await?;
            }
        }
        Ok(())
    }

    /// Informational line marked as a title with the `TITLE` selector.
    /// Clients that do not know the convention show it as plain info.
    pub async fn title(&mut self, text: &str) -> anyhow::Result<()> {
        self.line(&MenuLine::new(ItemType::Info, text).selector("TITLE"))
            .await
    }

    /// Link to a menu on this server.
    pub async fn directory(&mut self, display: &str, path: &str) -> anyhow::Result<()> {
        self.remote_directory(display, path, None, None).await
    }

    /// Link to a menu, on another server when `host` or `port` is given.
    pub async fn remote_directory(
        &mut self,
        display: &str,
        path: &str,
        host: Option<&str>,
        port: Option<u16>,
    ) -> anyhow::Result<()> {
        let host = host.unwrap_or(self.server.host.as_str()).to_string();
        let port = port.unwrap_or(self.server.port);
        self.line(
            &MenuLine::new(ItemType::Directory, display)
                .selector(path)
                .host(host)
                .port(port),
        )
        .await
    }

    /// Link to a URL.
    ///
    /// `gopher://` URLs become a native menu line: the first path character
    /// after the slash is the item type (directory when the path is too
    /// short) and the rest is the selector. Any other scheme becomes an `h`
    /// line with a `URL:` selector.
    pub async fn link(&mut self, display: &str, url: &str) -> anyhow::Result<()> {
        let parsed = Url::parse(url).with_context(|| format!("invalid link URL {:?}", url))?;

        if parsed.scheme() != "gopher" {
            return self
                .line(&MenuLine::new(ItemType::Html, display).selector(format!("URL:{}", url)))
                .await;
        }

        let mut rest = parsed.path().chars();
        rest.next();
        let item_type = rest
            .next()
            .map(ItemType::from_char)
            .unwrap_or(ItemType::Directory);

        let line = MenuLine::new(item_type, display)
            .selector(rest.as_str())
            .host(parsed.host_str().unwrap_or_default())
            .port(parsed.port().unwrap_or(DEFAULT_GOPHER_PORT));
        self.line(&line).await
    }

    /// Error line. Carries no selector.
    pub async fn error(&mut self, text: &str) -> anyhow::Result<()> {
        self.line(&MenuLine::new(ItemType::Error, text)).await
    }

    /// Search prompt; the answer is sent to `path` on this server.
    pub async fn search(&mut self, display: &str, path: &str) -> anyhow::Result<()> {
        let line = MenuLine::new(ItemType::Search, display)
            .selector(path)
            .host(self.server.host.clone())
            .port(self.server.port);
        self.line(&line).await
    }

    /// Flushes and shuts down the write side of the connection.
    pub async fn close(mut self) -> anyhow::Result<()> {
        self.sink.flush().await?;
        self.sink.shutdown().await?;
        Ok(())
    }
}

/// Splits `line` into chunks of at most `width` bytes. A cut that would land
/// inside a multi-byte character moves back to the previous boundary.
fn wrap(mut line: &str, width: usize) -> Vec<&str> {
    let mut chunks = Vec::new();

    while line.len() > width {
        let mut cut = width;
        while !line.is_char_boundary(cut) {
            cut -= 1;
        }
        // a single character wider than `width`
        if cut == 0 {
            cut = line.chars().next().map_or(line.len(), char::len_utf8);
        }
        let (head, tail) = line.split_at(cut);
        chunks.push(head);
        line = tail;
    }

    chunks.push(line);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_line_is_untouched() {
        assert_eq!(wrap("hello", 70), vec!["hello"]);
        assert_eq!(wrap("", 70), vec![""]);
    }

    #[test]
    fn wrap_exact_multiple_has_no_empty_tail() {
        let line = "a".repeat(140);
        let chunks = wrap(&line, 70);

        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.len() == 70));
    }

    #[test]
    fn wrap_respects_char_boundaries() {
        let line = "é".repeat(40);
        let chunks = wrap(&line, 70);

        assert_eq!(chunks.concat(), line);
        assert!(chunks.iter().all(|c| c.len() <= 70));
        assert_eq!(chunks[0].len(), 70);
    }

    #[test]
    fn wrap_narrower_than_one_character() {
        let chunks = wrap("éa", 1);

        assert_eq!(chunks, vec!["é", "a"]);
    }
}
