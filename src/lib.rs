// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod database;
pub mod error;
pub mod reindex;
pub mod utils;

pub use config::{DgraphConfig, EmbeddingDefinition, EmbeddingManifest};
pub use database::{DgraphClient, SchemaManager};
pub use error::{ReindexError, Result};
pub use reindex::{Reindexer, select_definitions, should_proceed};
