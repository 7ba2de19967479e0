//! Link to the project's source repository.

use std::fmt;
use std::sync::Arc;

/// URL of the external source-code repository shown on the download page.
///
/// The value is fixed once configuration is loaded and never mutated. It is
/// not validated: whatever string was configured, empty included, is handed to
/// the page unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RepositoryLink(Arc<str>);

impl RepositoryLink {
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when the value parses as an absolute URL.
    ///
    /// Only used for startup diagnostics; an unparseable link is still served.
    pub fn looks_like_url(&self) -> bool {
        url::Url::parse(&self.0).is_ok()
    }
}

impl fmt::Display for RepositoryLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RepositoryLink {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for RepositoryLink {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for RepositoryLink {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
