//! Config scaffolding

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{GraphConfig, CONFIG_FILE};

/// Write the sample configuration into `dir`, refusing to overwrite an
/// existing one unless `force` is set
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        );
    }

    let content = format!(
        "# scrollgraph plot configuration\n\n{}",
        GraphConfig::sample().to_toml()?
    );
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "scrollgraph-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = scratch_dir("init");
        let path = init_config(&dir, false).unwrap();

        let config = GraphConfig::load(&dir).unwrap();
        assert_eq!(config.plots.len(), 2);
        assert!(path.ends_with(CONFIG_FILE));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = scratch_dir("overwrite");
        init_config(&dir, false).unwrap();
        assert!(init_config(&dir, false).is_err());
        assert!(init_config(&dir, true).is_ok());

        fs::remove_dir_all(&dir).unwrap();
    }
}
