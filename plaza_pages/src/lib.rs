//! Page components and navigation shell for the plaza community site.
//!
//! Pages are plain HTML renderers behind a tagged-variant [`Page`] enum:
//! one variant per route target, dispatched by a `match` rather than a
//! type hierarchy. Every renderer is a pure function of the captured
//! route parameters, so pages mount and unmount idempotently.

mod nav;
mod page;

pub use nav::nav_bar;
pub use page::Page;
