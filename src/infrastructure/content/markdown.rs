// src/infrastructure/content/markdown.rs
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::front_matter::{FrontMatter, split_front_matter};
use crate::domain::content::{ContentItem, ContentRepository};
use crate::domain::errors::{DomainError, DomainResult};

const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Reads every markdown file below a directory. Each file must start with a
/// YAML front matter block.
#[derive(Debug, Clone)]
pub struct MarkdownContentRepository {
    root: PathBuf,
}

impl MarkdownContentRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentRepository for MarkdownContentRepository {
    async fn load_all(&self) -> DomainResult<Vec<ContentItem>> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || load_directory(&root))
            .await
            .map_err(|err| DomainError::Io(format!("content loader task failed: {err}")))?
    }
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            CONTENT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

pub fn load_directory(root: &Path) -> DomainResult<Vec<ContentItem>> {
    if !root.is_dir() {
        return Err(DomainError::Configuration(format!(
            "content directory {} does not exist",
            root.display()
        )));
    }

    let mut items = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|err| DomainError::Io(err.to_string()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_content_file(path) {
            tracing::debug!(path = %path.display(), "skipping non-content entry");
            continue;
        }
        items.push(load_file(path)?);
    }

    tracing::info!(root = %root.display(), count = items.len(), "loaded markdown content");
    Ok(items)
}

pub fn load_file(path: &Path) -> DomainResult<ContentItem> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| DomainError::Io(format!("{}: {err}", path.display())))?;
    parse_document(path, &raw)
}

fn parse_document(path: &Path, raw: &str) -> DomainResult<ContentItem> {
    let invalid = |msg: String| DomainError::Validation(format!("{}: {msg}", path.display()));

    let (header, body) =
        split_front_matter(raw).ok_or_else(|| invalid("missing front matter".into()))?;
    let front_matter: FrontMatter =
        serde_yaml::from_str(header).map_err(|err| invalid(err.to_string()))?;

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    front_matter
        .into_item(&slug::slugify(stem), body)
        .map_err(|err| invalid(err.to_string()))
}
