//! Outlet composition: splicing nested page output into parent output.
//!
//! A parent layout marks where nested content belongs with a comment pair;
//! the matched child's output replaces whatever sits between the markers.
//! A parent that renders no outlet shows only itself and the nested
//! content is dropped.

/// Marks where nested content begins inside a rendered fragment.
pub const OUTLET_BEGIN: &str = "<!-- @outlet-begin -->";

/// Marks where nested content ends.
pub const OUTLET_END: &str = "<!-- @outlet-end -->";

/// Composes a matched page chain into one HTML fragment.
///
/// The first page renders as-is; each following page is spliced into the
/// accumulated output's outlet.
pub fn compose<T>(pages: &[T], render: impl Fn(&T) -> String) -> String {
    let mut html = String::new();

    for page in pages {
        let chunk = render(page);

        if html.is_empty() {
            html = chunk;
        } else {
            splice(&mut html, &chunk);
        }
    }

    html
}

/// Replaces the content between the outlet markers of `parent` with
/// `child`. Leaves `parent` untouched when it contains no outlet.
pub fn splice(parent: &mut String, child: &str) {
    let Some(begin) = parent.find(OUTLET_BEGIN) else {
        return;
    };

    let start = begin + OUTLET_BEGIN.len();

    let Some(end) = parent[start..].find(OUTLET_END) else {
        return;
    };

    parent.replace_range(start..start + end, child);
}
