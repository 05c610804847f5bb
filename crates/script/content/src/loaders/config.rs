//! Script configuration loader.

use std::path::Path;

use script_core::ScriptConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for script configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Fields missing from the file keep their built-in defaults, so a
    /// deployment only has to spell out what it tunes.
    pub fn load(path: &Path) -> LoadResult<ScriptConfig> {
        let content = read_file(path)?;
        let config: ScriptConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
