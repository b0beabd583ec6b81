use std::path::{Path, PathBuf};

use crate::core::config::{Dependency, SiteConfig};

/// Project metadata the built-in reports render from.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub authors: Vec<String>,
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub path: PathBuf,
    pub manifest: Manifest,
}

impl Project {
    pub fn new(path: &Path, config: &SiteConfig) -> anyhow::Result<Self> {
        let canonical = path.canonicalize()?;
        let manifest = Manifest::from_config(config, &canonical);
        Ok(Self {
            path: canonical,
            manifest,
        })
    }
}

impl Manifest {
    fn from_config(config: &SiteConfig, path: &Path) -> Self {
        let meta = config.project.clone().unwrap_or_default();
        let fallback_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());
        Self {
            name: meta.name.unwrap_or(fallback_name),
            version: meta.version,
            description: meta.description,
            authors: meta.authors.unwrap_or_default(),
            dependencies: meta.dependencies.unwrap_or_default(),
        }
    }
}
