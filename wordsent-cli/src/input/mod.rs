//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod token_reader;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use token_reader::{parse_tokens, InputFormat};
