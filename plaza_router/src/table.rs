//! The route table: an immutable mapping from URL paths to page chains.

use std::collections::HashMap;
use std::fmt;

use matchit::Router;

use crate::path;
use crate::{RouteEntry, RouteTableError};

/// Parameter values captured from dynamic path segments, keyed by the
/// capture name declared in the pattern.
pub type Params = HashMap<String, String>;

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<T> {
    /// Page tags along the matched entries, parent first. Layout-only
    /// entries contribute nothing; an index child stands in for its parent.
    pub pages: Vec<T>,
    /// Captured dynamic segment values.
    pub params: Params,
}

/// A validated route table.
///
/// Built once at startup from declarative [`RouteEntry`] values and never
/// mutated afterwards; only the current match changes as the observed path
/// changes. Nested entries are flattened into full patterns at build time,
/// so resolution is a single matcher lookup.
pub struct RouteTable<T> {
    router: Router<Vec<T>>,
}

impl<T: Clone> RouteTable<T> {
    /// Flattens `entries` into full patterns, validates them, and registers
    /// them with the matcher.
    ///
    /// Fails if two entries flatten to conflicting patterns, if a capture
    /// name repeats within one pattern, or if an index entry declares
    /// children.
    pub fn new(entries: Vec<RouteEntry<T>>) -> Result<Self, RouteTableError> {
        let mut table = Self {
            router: Router::new(),
        };

        for entry in entries {
            table.mount(entry, "", &[])?;
        }

        Ok(table)
    }

    /// Registers `entry` under `parent_pattern` and recurses into its
    /// children.
    ///
    /// A parent whose children include an index entry registers the index
    /// page under its own exact pattern, so the index child renders when
    /// the parent path matches with no further suffix.
    fn mount(
        &mut self,
        entry: RouteEntry<T>,
        parent_pattern: &str,
        parent_pages: &[T],
    ) -> Result<(), RouteTableError> {
        let pattern = path::join(parent_pattern, entry.path);

        let mut pages = parent_pages.to_vec();
        if let Some(page) = entry.page {
            pages.push(page);
        }

        let index_page = entry
            .children
            .iter()
            .find(|child| child.index)
            .and_then(|child| child.page.clone());

        let mut own_chain = pages.clone();
        if let Some(index_page) = index_page {
            own_chain.push(index_page);
        }

        self.insert(&pattern, own_chain)?;

        for child in entry.children {
            if child.index {
                if !child.children.is_empty() {
                    return Err(RouteTableError::IndexWithChildren { pattern });
                }
                continue;
            }

            self.mount(child, &pattern, &pages)?;
        }

        Ok(())
    }

    fn insert(&mut self, pattern: &str, pages: Vec<T>) -> Result<(), RouteTableError> {
        let mut seen: Vec<&str> = Vec::new();

        for name in path::param_names(pattern) {
            if seen.contains(&name) {
                return Err(RouteTableError::DuplicateParam {
                    pattern: pattern.to_owned(),
                    name: name.to_owned(),
                });
            }

            seen.push(name);
        }

        self.router
            .insert(pattern, pages)
            .map_err(|source| RouteTableError::ConflictingPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// Resolves `path` against the table.
    ///
    /// Literal segments match exactly; a `{name}` segment matches any
    /// single segment and binds its value. Returns `None` when no entry
    /// matches — the not-found rendition is the caller's concern.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<T>> {
        let matched = self.router.at(path).ok()?;

        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();

        Some(RouteMatch {
            pages: matched.value.clone(),
            params,
        })
    }
}

impl<T> fmt::Debug for RouteTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("router", &"Router<Vec<T>> { ... }")
            .finish()
    }
}
