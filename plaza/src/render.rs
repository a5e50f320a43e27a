//! Document rendering: the navigation shell plus the matched page chain.

use plaza_pages::{Page, nav_bar};
use plaza_router::{RouteTable, outlet};

/// Renders the full HTML document for `path`, or `None` when no route
/// matches and the caller's not-found handling applies.
pub fn render_document(table: &RouteTable<Page>, path: &str) -> Option<String> {
    let matched = table.resolve(path)?;

    tracing::debug!(path, pages = matched.pages.len(), "route matched");

    let content = outlet::compose(&matched.pages, |page| page.render(&matched.params));

    let mut document = shell();
    outlet::splice(&mut document, &content);

    Some(document)
}

/// The document shell: navigation bar plus an outlet for the matched
/// content. Rendered identically regardless of the current path.
fn shell() -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"en\">",
            "<head><meta charset=\"UTF-8\"/>",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>",
            "<title>Plaza</title></head>",
            "<body>{nav}{begin}{end}</body>",
            "</html>"
        ),
        nav = nav_bar(),
        begin = outlet::OUTLET_BEGIN,
        end = outlet::OUTLET_END,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route_table;

    #[test]
    fn document_wraps_page_in_shell() {
        let table = route_table().expect("route table builds");
        let html = render_document(&table, "/gallery").expect("route matches");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<nav class="nav-bar">"#));
        assert!(html.contains(r#"class="page-gallery""#));
    }

    #[test]
    fn unmatched_path_renders_nothing() {
        let table = route_table().expect("route table builds");

        assert!(render_document(&table, "/nonexistent").is_none());
    }
}
