/// A parsed Gopher request.
///
/// Built once per connection from the first line the client sends and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Selector path, always starting with `/`
    pub path: String,
    /// Search string sent after a tab, if any
    pub query: Option<String>,
}

impl Request {
    /// Creates a request, normalizing the path.
    ///
    /// A path that does not start with `/` gets one prepended, so the empty
    /// selector becomes the root menu and `menu` becomes `/menu`. An empty
    /// query counts as no query.
    ///
    /// ```
    /// # use hole::gopher::request::Request;
    /// let req = Request::new("about", None);
    /// assert_eq!(req.path, "/about");
    /// assert_eq!(Request::new("", None).path, "/");
    /// ```
    pub fn new(path: impl Into<String>, query: Option<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };

        Self {
            path,
            query: query.filter(|q| !q.is_empty()),
        }
    }

    /// Returns the query as a string slice.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}
