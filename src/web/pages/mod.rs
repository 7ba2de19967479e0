//! Server-rendered pages.

pub mod download;

pub use download::{DEFAULT_TITLE, DownloadPage, DownloadTemplate};
