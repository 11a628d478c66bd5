use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::utils;

/// Import settings for a single `.obj` file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObjMeta {
    /// Material library, relative to the folder of the obj. Defaults to `<stem>.mtl`.
    pub material_library: Option<PathBuf>,
    pub flip_axis: [bool; 3],
}

impl ObjMeta {
    pub fn parse(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read meta file: {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("Invalid meta file: {}", path.display()))
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Parse meta from file called `file.toml` or alternativley from folder scoped meta file named `obj.toml` or else use default meta
    pub fn find(obj_path: &Path) -> Result<Self> {
        let dir = utils::parent_dir(obj_path)?;
        let file_name = utils::file_name(obj_path)?;

        for path in [
            utils::combine_path(dir, file_name, "toml"),
            utils::combine_path(dir, "obj", "toml"),
        ] {
            if path.is_file() {
                return Self::parse(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn material_library_path(&self, obj_path: &Path) -> Result<PathBuf> {
        let dir = utils::parent_dir(obj_path)?;
        Ok(match &self.material_library {
            Some(library) => dir.join(library),
            None => utils::combine_path(dir, utils::file_name(obj_path)?, "mtl"),
        })
    }
}
