//! Route table core for the plaza community site.
//!
//! This crate turns a declarative set of [`RouteEntry`] values into an
//! immutable, validated [`RouteTable`] built on the `matchit` matcher.
//! Resolving a URL path is a pure synchronous lookup that yields the chain
//! of page tags along the matched entries together with the parameter
//! values captured from dynamic segments.

mod entry;
mod error;
pub mod outlet;
mod path;
mod table;

pub use entry::RouteEntry;
pub use error::RouteTableError;
pub use table::{Params, RouteMatch, RouteTable};
