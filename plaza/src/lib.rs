//! Routing entry point of the plaza community site.
//!
//! Declares the route table mapping URL paths to pages, the navigation
//! store holding the current path, and the document renderer that wraps
//! matched pages in the navigation shell.

pub mod navigation;
pub mod render;
pub mod routes;

#[cfg(target_arch = "wasm32")]
pub mod history;

pub use plaza_pages::Page;
pub use routes::route_table;
