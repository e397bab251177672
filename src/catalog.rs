use std::path::{Path, PathBuf};

use crate::{errors::AppError, models::CatalogImage};

pub const CATALOG_EXTENSION: &str = "png";

/// Lists catalog images sorted by filename. A missing directory is an empty
/// catalog.
pub async fn list_catalog_images(dir: &Path) -> Result<Vec<CatalogImage>, AppError> {
    if !tokio::fs::try_exists(dir).await? {
        tracing::debug!("Catalog directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut filenames = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        // follows symlinks; dangling links are skipped
        let Ok(meta) = tokio::fs::metadata(entry.path()).await else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };

        // glob semantics: hidden files never match
        if name.starts_with('.') {
            continue;
        }

        let is_catalog_image = Path::new(&name)
            .extension()
            .is_some_and(|ext| ext == CATALOG_EXTENSION);

        if is_catalog_image {
            filenames.push(name);
        }
    }

    filenames.sort();

    Ok(filenames
        .into_iter()
        .enumerate()
        .map(|(position, filename)| CatalogImage::new(position, filename))
        .collect())
}

/// Resolves `filename` inside the catalog directory. Only plain file names
/// are accepted; anything else, or a file that does not exist, is not found.
pub async fn resolve_catalog_image(dir: &Path, filename: &str) -> Result<PathBuf, AppError> {
    let not_found = || AppError::NotFound("Image not found".into());

    let is_plain_name = Path::new(filename)
        .file_name()
        .is_some_and(|name| name == filename);
    if !is_plain_name {
        return Err(not_found());
    }

    let path = dir.join(filename);
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => Ok(path),
        _ => Err(not_found()),
    }
}
