//! Download page.

use askama::Template;
use askama_web::WebTemplate;

use crate::domain::RepositoryLink;

/// Title used when no route overrides it and none is configured.
pub const DEFAULT_TITLE: &str = "Nagato";

/// The download page: a single outbound link to the source repository.
///
/// Holds the configured [`RepositoryLink`] by value so rendering never reaches
/// for global state.
#[derive(Debug, Clone)]
pub struct DownloadPage {
    repository: RepositoryLink,
    title: String,
}

impl DownloadPage {
    pub fn new(repository: RepositoryLink, title: impl Into<String>) -> Self {
        Self {
            repository,
            title: title.into(),
        }
    }

    /// Returns the configured repository URL unchanged.
    pub fn repo_link(&self) -> &RepositoryLink {
        &self.repository
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Builds the view for this page, optionally with a per-route title.
    pub fn template(&self, title_override: Option<&str>) -> DownloadTemplate {
        DownloadTemplate {
            title: title_override.unwrap_or(self.title.as_str()).to_string(),
            repo_link: self.repo_link().clone(),
        }
    }
}

/// Template for the download page.
///
/// Renders `templates/download.html` inside the `base.html` shell.
#[derive(Template, WebTemplate)]
#[template(path = "download.html")]
pub struct DownloadTemplate {
    pub title: String,
    pub repo_link: RepositoryLink,
}
