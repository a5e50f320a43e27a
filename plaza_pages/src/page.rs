use plaza_router::Params;

/// Every page of the community site, one variant per route target.
///
/// Several routes map onto the same variant: the board list and a single
/// board share [`Page::Board`], and the wiki alias paths (`/intro`,
/// `/history`, ...) all render [`Page::Wiki`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page at `/`.
    Main,
    /// Board list, or a single board when `board_id` is captured.
    Board,
    /// Photo gallery.
    Gallery,
    /// Login form.
    Login,
    /// Member registration form.
    Join,
    /// Post composer.
    Write,
    /// Post list, or a single post when `view_id` is captured.
    View,
    /// Wiki reader, also serving the static alias paths.
    Wiki,
    /// Wiki editor, creating a page or editing `wiki_title`.
    WikiEdit,
    /// Upcoming events, the index under `/event`.
    EventList,
    /// A single event identified by `eventId`.
    EventDetail,
}

impl Page {
    /// Renders the page body for the captured route parameters.
    ///
    /// Output depends only on the variant and `params`, so remounting the
    /// same page for the same path always yields identical markup.
    pub fn render(self, params: &Params) -> String {
        match self {
            Page::Main => {
                r#"<main class="page-main"><h1>Plaza</h1><p>Community home.</p></main>"#.to_owned()
            }
            Page::Board => match params.get("board_id") {
                Some(board_id) => format!(
                    r#"<main class="page-board" data-board="{board_id}"><h1>Board {board_id}</h1></main>"#
                ),
                None => r#"<main class="page-board"><h1>Boards</h1></main>"#.to_owned(),
            },
            Page::Gallery => r#"<main class="page-gallery"><h1>Gallery</h1></main>"#.to_owned(),
            Page::Login => {
                r#"<main class="page-login"><h1>Log in</h1><form class="login-form"></form></main>"#
                    .to_owned()
            }
            Page::Join => {
                r#"<main class="page-join"><h1>Join</h1><form class="join-form"></form></main>"#
                    .to_owned()
            }
            Page::Write => {
                r#"<main class="page-write"><h1>New post</h1><form class="write-form"></form></main>"#
                    .to_owned()
            }
            Page::View => match params.get("view_id") {
                Some(view_id) => format!(
                    r#"<main class="page-view" data-view="{view_id}"><h1>Post {view_id}</h1></main>"#
                ),
                None => r#"<main class="page-view"><h1>Posts</h1></main>"#.to_owned(),
            },
            Page::Wiki => r#"<main class="page-wiki"><h1>Wiki</h1></main>"#.to_owned(),
            Page::WikiEdit => match params.get("wiki_title") {
                Some(wiki_title) => format!(
                    r#"<main class="page-wiki-edit" data-title="{wiki_title}"><h1>Editing {wiki_title}</h1></main>"#
                ),
                None => {
                    r#"<main class="page-wiki-edit"><h1>New wiki page</h1></main>"#.to_owned()
                }
            },
            Page::EventList => {
                r#"<main class="page-event-list"><h1>Upcoming events</h1></main>"#.to_owned()
            }
            Page::EventDetail => {
                let event_id = params.get("eventId").map_or("unknown", String::as_str);

                format!(
                    r#"<main class="page-event-detail" data-event="{event_id}"><h1>Event {event_id}</h1></main>"#
                )
            }
        }
    }
}
