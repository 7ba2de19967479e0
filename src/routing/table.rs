//! Ordered navigation table with a catch-all redirect.
//!
//! Routes are tried in declaration order. The first route whose pattern equals
//! the normalized request path wins; when none matches, the table's fallback
//! answers with a redirect to a page route. Because the fallback target is
//! checked at construction, every path settles on a page after at most one
//! redirect.

use super::error::RouteError;

/// Leading and trailing slashes as well as any query string or fragment are
/// ignored, so `/`, `//` and `/?utm=x` all normalize to the empty path.
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.trim_matches('/')
}

/// Page a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Download,
}

/// A path pattern and the page it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: String,
    target: RouteTarget,
    title: Option<String>,
}

impl Route {
    /// Creates a route for `pattern`; the pattern is normalized like a request path.
    pub fn new(pattern: impl AsRef<str>, target: RouteTarget) -> Self {
        Self {
            pattern: normalize_path(pattern.as_ref()).to_string(),
            target,
            title: None,
        }
    }

    /// Overrides the document title for this route.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn target(&self) -> RouteTarget {
        self.target
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Absolute path of this route, e.g. `/` or `/download`.
    pub fn location(&self) -> String {
        format!("/{}", self.pattern)
    }

    fn matches(&self, normalized: &str) -> bool {
        self.pattern == normalized
    }
}

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path is recognized; render the route's page.
    Page(&'a Route),
    /// The path is unknown; send the client to `location`.
    Redirect { location: String },
}

/// Which generation of the navigation table to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingVariant {
    /// Only the root path renders the page.
    #[default]
    Canonical,
    /// Only `/download` renders the page; everything else, root included,
    /// redirects there.
    Legacy,
}

/// Ordered list of page routes plus an always-matching redirect fallback.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    redirect_to: String,
}

impl RouteTable {
    /// Builds a table from `routes` with unmatched paths redirecting to `redirect_to`.
    ///
    /// # Errors
    ///
    /// - [`RouteError::Empty`] when `routes` is empty
    /// - [`RouteError::DuplicatePattern`] when two routes share a pattern
    /// - [`RouteError::UnknownRedirectTarget`] when `redirect_to` names no route
    pub fn new(routes: Vec<Route>, redirect_to: impl AsRef<str>) -> Result<Self, RouteError> {
        if routes.is_empty() {
            return Err(RouteError::Empty);
        }

        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|r| r.pattern == route.pattern) {
                return Err(RouteError::DuplicatePattern(route.pattern.clone()));
            }
        }

        let redirect_to = normalize_path(redirect_to.as_ref()).to_string();
        if !routes.iter().any(|r| r.matches(&redirect_to)) {
            return Err(RouteError::UnknownRedirectTarget(redirect_to));
        }

        Ok(Self {
            routes,
            redirect_to,
        })
    }

    /// Root path renders the download page; everything else redirects to `/`.
    pub fn canonical() -> Self {
        Self {
            routes: vec![Route::new("", RouteTarget::Download)],
            redirect_to: String::new(),
        }
    }

    /// Older layout: the page lives at `/download` and every other path,
    /// root included, redirects there.
    pub fn legacy() -> Self {
        Self {
            routes: vec![Route::new("download", RouteTarget::Download)],
            redirect_to: "download".to_string(),
        }
    }

    pub fn for_variant(variant: RoutingVariant) -> Self {
        match variant {
            RoutingVariant::Canonical => Self::canonical(),
            RoutingVariant::Legacy => Self::legacy(),
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Absolute path that unmatched requests are redirected to.
    pub fn redirect_location(&self) -> String {
        format!("/{}", self.redirect_to)
    }

    /// Resolves a request path against the table.
    ///
    /// Never fails: unknown paths produce [`Resolution::Redirect`].
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let normalized = normalize_path(path);

        match self.routes.iter().find(|route| route.matches(normalized)) {
            Some(route) => Resolution::Page(route),
            None => Resolution::Redirect {
                location: self.redirect_location(),
            },
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::canonical()
    }
}
