/// A single entry of the route table: a path pattern paired with the page
/// rendered when the pattern matches, plus optional nested child entries.
///
/// Patterns use `matchit` syntax; a `{name}` segment matches any single
/// path segment and binds it under `name`.
#[derive(Debug, Clone)]
pub struct RouteEntry<T> {
    pub(crate) path: &'static str,
    pub(crate) page: Option<T>,
    pub(crate) children: Vec<RouteEntry<T>>,
    pub(crate) index: bool,
}

impl<T> RouteEntry<T> {
    /// Entry rendering `page` when `path` matches.
    pub fn page(path: &'static str, page: T) -> Self {
        Self {
            path,
            page: Some(page),
            children: Vec::new(),
            index: false,
        }
    }

    /// Layout-only entry: groups children under `path` without a page of
    /// its own.
    pub fn group(path: &'static str) -> Self {
        Self {
            path,
            page: None,
            children: Vec::new(),
            index: false,
        }
    }

    /// Index entry: the default child rendered when the parent path
    /// matches exactly with no further suffix.
    pub fn index(page: T) -> Self {
        Self {
            path: "",
            page: Some(page),
            children: Vec::new(),
            index: true,
        }
    }

    /// Attaches nested child entries, matched against the path remainder
    /// after this entry's pattern.
    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteEntry<T>>) -> Self {
        self.children = children;
        self
    }
}
