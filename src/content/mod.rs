//! Content module - article entries, the content API and markdown rendering

pub mod client;
mod entry;
mod markdown;

pub use client::{ContentSource, DeliveryClient, EntryQuery, MemorySource};
pub use entry::{Entry, EntryCollection};
pub use markdown::{ArticleRenderer, MarkdownOptions, MarkdownRenderer, MathOptions};
