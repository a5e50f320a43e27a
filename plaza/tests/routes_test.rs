#![allow(missing_docs)]

use plaza::render::render_document;
use plaza::route_table;
use plaza_pages::Page;
use plaza_router::RouteTable;

fn table() -> RouteTable<Page> {
    route_table().expect("route table builds")
}

#[test]
fn literal_paths_render_shell_and_page() {
    let table = table();

    let cases = [
        ("/", "page-main"),
        ("/board", "page-board"),
        ("/login", "page-login"),
        ("/join", "page-join"),
        ("/write", "page-write"),
        ("/view", "page-view"),
        ("/wiki", "page-wiki"),
        ("/wiki/edit", "page-wiki-edit"),
        ("/gallery", "page-gallery"),
    ];

    for (path, marker) in cases {
        let html = render_document(&table, path).unwrap_or_else(|| panic!("no match for {path}"));

        assert!(html.contains(r#"<nav class="nav-bar">"#), "{path}: shell missing");
        assert!(html.contains(&format!(r#"class="{marker}""#)), "{path}: page missing");
    }
}

#[test]
fn board_receives_board_id() {
    let matched = table().resolve("/board/42").expect("route matches");

    assert_eq!(matched.params.get("board_id").map(String::as_str), Some("42"));
    assert!(matched.pages.contains(&Page::Board));

    let html = render_document(&table(), "/board/42").expect("route matches");
    assert!(html.contains(r#"data-board="42""#));
}

#[test]
fn view_receives_view_id() {
    let matched = table().resolve("/view/7").expect("route matches");

    assert_eq!(matched.params.get("view_id").map(String::as_str), Some("7"));

    let html = render_document(&table(), "/view/7").expect("route matches");
    assert!(html.contains(r#"data-view="7""#));
}

#[test]
fn wiki_editor_receives_wiki_title() {
    let matched = table().resolve("/wiki/edit/Home").expect("route matches");

    assert_eq!(
        matched.params.get("wiki_title").map(String::as_str),
        Some("Home")
    );

    let html = render_document(&table(), "/wiki/edit/Home").expect("route matches");
    assert!(html.contains("Editing Home"));
}

#[test]
fn event_index_and_detail() {
    let table = table();

    let index = table.resolve("/event").expect("route matches");
    assert_eq!(index.pages, vec![Page::EventList]);

    let detail = table.resolve("/event/99").expect("route matches");
    assert_eq!(detail.pages, vec![Page::EventDetail]);
    assert_eq!(detail.params.get("eventId").map(String::as_str), Some("99"));

    let html = render_document(&table, "/event/99").expect("route matches");
    assert!(html.contains(r#"data-event="99""#));
}

#[test]
fn wiki_aliases_render_identically() {
    let table = table();
    let wiki = render_document(&table, "/wiki").expect("route matches");

    for alias in ["/intro", "/history", "/rule", "/executive", "/homepage"] {
        let html = render_document(&table, alias)
            .unwrap_or_else(|| panic!("no match for {alias}"));

        assert_eq!(html, wiki, "{alias} diverged from /wiki");
    }

    // Repeated navigation to the same alias is idempotent.
    assert_eq!(
        render_document(&table, "/intro"),
        render_document(&table, "/intro")
    );
}

#[test]
fn nav_shell_is_invariant_across_paths() {
    let table = table();

    let shell_of = |path: &str| -> String {
        let html = render_document(&table, path).unwrap_or_else(|| panic!("no match for {path}"));
        let start = html.find("<nav").expect("shell present");
        let end = html.find("</nav>").expect("shell closed") + "</nav>".len();
        html[start..end].to_owned()
    };

    let reference = shell_of("/");

    for path in ["/board/42", "/event", "/event/99", "/wiki/edit/Home", "/gallery"] {
        assert_eq!(shell_of(path), reference, "{path}: shell changed");
    }
}

#[test]
fn unknown_paths_fall_through() {
    let table = table();

    assert!(table.resolve("/no-such-page").is_none());
    assert!(table.resolve("/board/42/extra").is_none());
    assert!(render_document(&table, "/no-such-page").is_none());
}
