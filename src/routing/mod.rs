//! Navigation table mapping request paths to pages.
//!
//! See [`RouteTable`] for resolution rules and [`RoutingVariant`] for the
//! two shipped tables.

pub mod error;
pub mod table;

pub use error::RouteError;
pub use table::{Resolution, Route, RouteTable, RouteTarget, RoutingVariant, normalize_path};
