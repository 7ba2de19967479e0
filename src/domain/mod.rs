//! Domain layer: the values the front end is built around.
//!
//! The only entity is [`RepositoryLink`], the configured URL of the source
//! repository.

pub mod repository_link;

pub use repository_link::RepositoryLink;
