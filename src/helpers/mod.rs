//! Helper functions for page markup
//!
//! Escaping, URL building and the page shell used by the server.

mod html;
mod url;

pub use html::*;
pub use url::*;
