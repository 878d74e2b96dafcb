pub mod content;
pub mod services;
