//! Web layer for the browser-facing front end.
//!
//! Pages are rendered on the server with Askama templates that extend the
//! `base.html` shell.
//!
//! # Modules
//!
//! - [`handlers`] - Route resolution and page rendering
//! - [`pages`] - Page components and their templates

pub mod handlers;
pub mod pages;
