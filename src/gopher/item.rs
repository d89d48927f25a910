/// Gopher item type characters.
///
/// Every menu line starts with one of these. The crate itself emits
/// `Directory`, `Info`, `Html`, `Search` and `Error`; the rest show up when a
/// `gopher://` URL is turned into a menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    /// `0` - plain text file
    TextFile,
    /// `1` - directory / menu
    Directory,
    /// `3` - error
    Error,
    /// `7` - full-text search prompt
    Search,
    /// `9` - binary file
    Binary,
    /// `g` - GIF image
    Gif,
    /// `I` - other image
    Image,
    /// `h` - HTML or external URL
    Html,
    /// `i` - informational, non-selectable text
    Info,
    /// Any type character not listed above
    Other(char),
}

impl ItemType {
    /// Maps a type character to its item type. Never fails; unknown
    /// characters become `Other`.
    ///
    /// ```
    /// # use hole::gopher::item::ItemType;
    /// assert_eq!(ItemType::from_char('1'), ItemType::Directory);
    /// assert_eq!(ItemType::from_char('+'), ItemType::Other('+'));
    /// ```
    pub fn from_char(c: char) -> Self {
        match c {
            '0' => ItemType::TextFile,
            '1' => ItemType::Directory,
            '3' => ItemType::Error,
            '7' => ItemType::Search,
            '9' => ItemType::Binary,
            'g' => ItemType::Gif,
            'I' => ItemType::Image,
            'h' => ItemType::Html,
            'i' => ItemType::Info,
            other => ItemType::Other(other),
        }
    }

    /// Returns the character written on the wire.
    pub fn as_char(&self) -> char {
        match self {
            ItemType::TextFile => '0',
            ItemType::Directory => '1',
            ItemType::Error => '3',
            ItemType::Search => '7',
            ItemType::Binary => '9',
            ItemType::Gif => 'g',
            ItemType::Image => 'I',
            ItemType::Html => 'h',
            ItemType::Info => 'i',
            ItemType::Other(c) => *c,
        }
    }
}
