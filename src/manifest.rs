//! Manifest loading: TOML descriptor lists from disk.
//!
//! A manifest is the non-interactive stand-in for a form: each
//! `[[property]]` or `[[block]]` table is one descriptor, in the order
//! the output should follow.
//!
//! ```text
//! [[property]]
//! kind = "title"
//! name = "Name"
//! content = "My page"
//! ```

use std::{fs, io, path::Path};

use serde::Deserialize;

use crate::model::{BlockDescriptor, FieldDescriptor};

/// Errors that can occur while loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid manifest: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = core::result::Result<T, ManifestError>;

#[derive(Debug, Deserialize)]
struct PropertyManifest {
    #[serde(default, rename = "property")]
    properties: Vec<FieldDescriptor>,
}

#[derive(Debug, Deserialize)]
struct BlockManifest {
    #[serde(default, rename = "block")]
    blocks: Vec<BlockDescriptor>,
}

/// Load the `[[property]]` descriptors from a manifest file.
pub fn load_properties(path: &Path) -> Result<Vec<FieldDescriptor>> {
    let contents = fs::read_to_string(path)?;
    let manifest: PropertyManifest = toml::from_str(&contents)?;
    Ok(manifest.properties)
}

/// Load the `[[block]]` descriptors from a manifest file.
pub fn load_blocks(path: &Path) -> Result<Vec<BlockDescriptor>> {
    let contents = fs::read_to_string(path)?;
    let manifest: BlockManifest = toml::from_str(&contents)?;
    Ok(manifest.blocks)
}
