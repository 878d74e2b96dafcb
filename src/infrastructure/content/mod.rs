pub mod front_matter;
mod markdown;

pub use markdown::{MarkdownContentRepository, load_directory, load_file};
