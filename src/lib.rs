pub mod annotator;
pub mod config;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod repl;
pub mod utils;
