/// Renders the navigation bar shown above every page.
///
/// The output carries no per-path state; it is the same for every route.
pub fn nav_bar() -> String {
    let links = [
        ("/", "Home"),
        ("/board", "Board"),
        ("/gallery", "Gallery"),
        ("/event", "Events"),
        ("/wiki", "Wiki"),
        ("/login", "Login"),
        ("/join", "Join"),
    ];

    let items: String = links
        .iter()
        .map(|(href, label)| format!(r#"<li><a href="{href}">{label}</a></li>"#))
        .collect();

    format!(r#"<nav class="nav-bar"><ul>{items}</ul></nav>"#)
}
