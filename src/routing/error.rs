//! Route table construction errors.

/// Errors raised while assembling a [`RouteTable`](super::RouteTable).
///
/// Every variant describes a table in which some path would not resolve to a
/// page, so such tables are rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Route table must contain at least one page route")]
    Empty,

    #[error("Duplicate route pattern: '/{0}'")]
    DuplicatePattern(String),

    #[error("Fallback redirect target '/{0}' is not a page route")]
    UnknownRedirectTarget(String),
}
