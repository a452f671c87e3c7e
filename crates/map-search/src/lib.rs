//! `map-search` — location name search for `rust_maps`.
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`trie`]      | `PrefixIndex`, `normalize_name`                   |
//! | [`locations`] | `LocationIndex`, `NamedLocation`                  |
//! | [`error`]     | `SearchError`, `SearchResult<T>`                  |
//!
//! Both indices are built once during ingestion and then only read, so they
//! can be shared across threads behind a plain reference.

pub mod error;
pub mod locations;
pub mod trie;


pub use error::{SearchError, SearchResult};
pub use locations::{LocationIndex, NamedLocation};
pub use trie::{PrefixIndex, normalize_name};
