//! Reading and writing the cache file and the generated source.

use anyhow::{Context, Result};
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::model::{CachedDataset, Dataset};
use crate::render::render_document;
use crate::runtime::Runtime;

#[tracing::instrument(skip(runtime))]
pub fn load_dataset<R: Runtime>(runtime: &R, path: &Path) -> Result<Dataset> {
    info!("Reading {}.", path.display());
    let content = runtime.read_to_string(path)?;
    let cached: CachedDataset = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cache file {}", path.display()))?;
    Ok(Dataset::from_cache(cached))
}

/// Write the dataset as pretty-printed JSON, replacing any previous file in one step.
#[tracing::instrument(skip(runtime, dataset))]
pub fn save_dataset<R: Runtime>(runtime: &R, path: &Path, dataset: &Dataset) -> Result<()> {
    info!("Writing to {}.", path.display());
    let json = serde_json::to_string_pretty(&dataset.to_cache())
        .context("Failed to serialize dataset")?;
    write_replacing(runtime, path, json.as_bytes())
}

/// Render the dataset into the generated source file.
#[tracing::instrument(skip(runtime, dataset))]
pub fn write_generated<R: Runtime>(runtime: &R, path: &Path, dataset: &Dataset) -> Result<()> {
    info!("Writing to {}.", path.display());
    let source = render_document(&dataset.to_render_value());
    write_replacing(runtime, path, source.as_bytes())
}

fn write_replacing<R: Runtime>(runtime: &R, path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !runtime.exists(parent) {
            runtime.create_dir_all(parent)?;
        }
    }

    let tmp = temp_path(path);
    runtime.write(&tmp, contents)?;
    runtime.rename(&tmp, path)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
