use thiserror::Error;

/// Errors detected while building a [`RouteTable`](crate::RouteTable).
///
/// The table is validated once at startup; none of these can occur during
/// resolution.
#[derive(Debug, Error)]
pub enum RouteTableError {
    /// Two entries flatten to patterns the matcher cannot tell apart.
    #[error("conflicting route pattern '{pattern}': {source}")]
    ConflictingPattern {
        /// The full pattern that failed to register.
        pattern: String,
        /// The underlying matcher error.
        #[source]
        source: matchit::InsertError,
    },

    /// The same capture name appears more than once within one pattern.
    #[error("duplicate parameter '{{{name}}}' in route pattern '{pattern}'")]
    DuplicateParam {
        /// The full pattern containing the repeated capture.
        pattern: String,
        /// The repeated capture name.
        name: String,
    },

    /// An index entry declared children, which can never match.
    #[error("index entry under '{pattern}' declares children")]
    IndexWithChildren {
        /// The parent pattern of the offending index entry.
        pattern: String,
    },
}
