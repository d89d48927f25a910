use std::fmt;

use crate::gopher::item::ItemType;
use crate::gopher::line::MenuLine;
use crate::gopher::request::Request;

/// Errors produced while decoding a menu line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    MissingTerminator,
    InvalidUtf8,
    /// Holds the number of tab-separated fields actually found
    FieldCount(usize),
    InvalidPort(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty menu line"),
            ParseError::MissingTerminator => write!(f, "menu line is not CRLF terminated"),
            ParseError::InvalidUtf8 => write!(f, "menu line is not valid UTF-8"),
            ParseError::FieldCount(n) => write!(f, "expected 4 tab-separated fields, found {}", n),
            ParseError::InvalidPort(p) => write!(f, "invalid port {:?}", p),
        }
    }
}

impl std::error::Error for ParseError {}

/// Decodes the request line a client sent.
///
/// Trailing whitespace (including the CRLF) is dropped. The first tab, if
/// any, separates the selector from the query; further tabs belong to the
/// query. Bytes that are not UTF-8 are replaced rather than rejected, so
/// this never fails.
pub fn parse_request(buf: &[u8]) -> Request {
    let input = String::from_utf8_lossy(buf);
    let input = input.trim_end();

    match input.split_once('\t') {
        Some((path, query)) => Request::new(path, Some(query.to_string())),
        None => Request::new(input, None),
    }
}

/// Decodes a single CRLF-terminated menu line.
pub fn parse_line(buf: &[u8]) -> Result<MenuLine, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let body = buf
        .strip_suffix(b"\r\n")
        .ok_or(ParseError::MissingTerminator)?;
    let body = std::str::from_utf8(body).map_err(|_| ParseError::InvalidUtf8)?;

    let mut chars = body.chars();
    let type_char = chars.next().ok_or(ParseError::Empty)?;

    let fields: Vec<&str> = chars.as_str().split('\t').collect();
    let [display, selector, host, port] = fields[..] else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    let port = port
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidPort(port.to_string()))?;

    Ok(MenuLine::new(ItemType::from_char(type_char), display)
        .selector(selector)
        .host(host)
        .port(port))
}
