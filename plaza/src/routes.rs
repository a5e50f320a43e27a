//! The declarative route table of the community site.

use plaza_pages::Page;
use plaza_router::{RouteEntry, RouteTable, RouteTableError};

/// Builds the route table, validated before the application starts.
///
/// `/intro`, `/history`, `/rule`, `/executive` and `/homepage` all resolve
/// to the wiki page: intentional aliases for wiki-backed static content,
/// not a conflict.
pub fn route_table() -> Result<RouteTable<Page>, RouteTableError> {
    RouteTable::new(vec![
        RouteEntry::page("/", Page::Main),
        RouteEntry::page("/board", Page::Board)
            .with_children(vec![RouteEntry::page("/{board_id}", Page::Board)]),
        RouteEntry::group("/event").with_children(vec![
            RouteEntry::index(Page::EventList),
            RouteEntry::page("/{eventId}", Page::EventDetail),
        ]),
        RouteEntry::page("/login", Page::Login),
        RouteEntry::page("/join", Page::Join),
        RouteEntry::page("/write", Page::Write),
        RouteEntry::page("/view", Page::View)
            .with_children(vec![RouteEntry::page("/{view_id}", Page::View)]),
        RouteEntry::page("/wiki", Page::Wiki),
        RouteEntry::page("/wiki/edit", Page::WikiEdit)
            .with_children(vec![RouteEntry::page("/{wiki_title}", Page::WikiEdit)]),
        RouteEntry::page("/gallery", Page::Gallery),
        RouteEntry::page("/intro", Page::Wiki),
        RouteEntry::page("/history", Page::Wiki),
        RouteEntry::page("/rule", Page::Wiki),
        RouteEntry::page("/executive", Page::Wiki),
        RouteEntry::page("/homepage", Page::Wiki),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_builds() {
        route_table().expect("route table is free of conflicts");
    }

    #[test]
    fn every_declared_pattern_resolves() {
        let table = route_table().expect("route table builds");

        for path in [
            "/", "/board", "/board/42", "/event", "/event/99", "/login", "/join", "/write",
            "/view", "/view/7", "/wiki", "/wiki/edit", "/wiki/edit/Home", "/gallery", "/intro",
            "/history", "/rule", "/executive", "/homepage",
        ] {
            assert!(table.resolve(path).is_some(), "no match for {path}");
        }
    }
}
