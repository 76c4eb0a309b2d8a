//! In-memory registry of build output assets.

use super::BuildContext;
use crate::log;
use crate::utils::path::is_safe_relative;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Asset emission errors
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("asset `{}` was already emitted", .0.display())]
    DuplicateAsset(PathBuf),

    #[error("asset name `{}` must be a relative path inside the output directory", .0.display())]
    InvalidName(PathBuf),
}

/// A named build output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
    /// Path relative to the output directory.
    pub file_name: PathBuf,
    pub source: Vec<u8>,
}

impl EmittedAsset {
    pub fn new(file_name: impl Into<PathBuf>, source: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }
}

/// Assets registered during one build, flushed to disk at the end.
#[derive(Debug, Default)]
pub struct OutputBundle {
    assets: Vec<EmittedAsset>,
    warnings: Vec<String>,
}

impl OutputBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered assets, in emission order.
    pub fn assets(&self) -> &[EmittedAsset] {
        &self.assets
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn get(&self, file_name: impl AsRef<Path>) -> Option<&EmittedAsset> {
        let file_name = file_name.as_ref();
        self.assets.iter().find(|asset| asset.file_name == file_name)
    }

    /// Write every asset under `output_dir`, creating directories as needed.
    ///
    /// Returns the written paths in emission order.
    pub fn write_to(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;

        let mut written = Vec::with_capacity(self.assets.len());
        for asset in &self.assets {
            let path = output_dir.join(&asset.file_name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, &asset.source)
                .with_context(|| format!("Failed to write asset to {}", path.display()))?;
            written.push(path);
        }
        Ok(written)
    }
}

impl BuildContext for OutputBundle {
    fn emit_file(&mut self, asset: EmittedAsset) -> Result<(), BundleError> {
        if !is_safe_relative(&asset.file_name) {
            return Err(BundleError::InvalidName(asset.file_name));
        }
        if self.get(&asset.file_name).is_some() {
            return Err(BundleError::DuplicateAsset(asset.file_name));
        }
        self.assets.push(asset);
        Ok(())
    }

    fn warn(&mut self, message: String) {
        log!("warning"; "{}", message);
        self.warnings.push(message);
    }
}
