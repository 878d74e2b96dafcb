mod yaml;

pub use yaml::{load_catalog, parse_catalog};
