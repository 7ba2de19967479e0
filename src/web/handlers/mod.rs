//! HTML rendering handlers.

mod navigate;

pub use navigate::navigate_handler;
