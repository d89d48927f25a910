use crate::gopher::item::ItemType;

/// Host written for lines that do not point anywhere.
pub const UNSET_HOST: &str = "host.invalid";
/// Port written for lines that do not point anywhere.
pub const UNSET_PORT: u16 = 0;

/// One line of a Gopher menu.
///
/// Selector, host and port are optional; unset values are written as the
/// empty string, [`UNSET_HOST`] and [`UNSET_PORT`] respectively, so the
/// encoded line always carries all four tab-separated fields.
///
/// Display text and selector are written as-is. Tabs or newlines inside them
/// corrupt the line; callers must keep them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    /// The type character
    pub item_type: ItemType,
    /// Text shown to the user
    pub display: String,
    /// Selector the client sends back when the line is chosen
    pub selector: Option<String>,
    /// Host serving the selector
    pub host: Option<String>,
    /// Port serving the selector
    pub port: Option<u16>,
}

impl MenuLine {
    pub fn new(item_type: ItemType, display: impl Into<String>) -> Self {
        Self {
            item_type,
            display: display.into(),
            selector: None,
            host: None,
            port: None,
        }
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Serializes the line into its wire form, CRLF included.
    pub fn encode(&self) -> Vec<u8> {
        encode_line(
            self.item_type,
            &self.display,
            self.selector.as_deref(),
            self.host.as_deref(),
            self.port,
        )
    }
}

/// Serializes a menu line:
/// `<type><display>\t<selector>\t<host>\t<port>\r\n`.
pub fn encode_line(
    item_type: ItemType,
    display: &str,
    selector: Option<&str>,
    host: Option<&str>,
    port: Option<u16>,
) -> Vec<u8> {
    let line = format!(
        "{}{}\t{}\t{}\t{}\r\n",
        item_type.as_char(),
        display,
        selector.unwrap_or(""),
        host.unwrap_or(UNSET_HOST),
        port.unwrap_or(UNSET_PORT),
    );
    line.into_bytes()
}
