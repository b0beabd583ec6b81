use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = ".siteforge.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub project: Option<ProjectMeta>,
    pub site: Option<SiteSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub authors: Option<Vec<String>>,
    pub dependencies: Option<Vec<Dependency>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: Option<String>,
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSection {
    pub locale: Option<String>,
    pub output_dir: Option<String>,
    pub skip: Option<Vec<String>>,
    pub apidoc: Option<ApiDocConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDocConfig {
    pub tool: String,
    pub args: Option<Vec<String>>,
}

impl SiteConfig {
    pub fn load(project_path: &Path) -> Self {
        let config_path = project_path.join(CONFIG_FILE);
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = serde_yaml::from_str::<SiteConfig>(&content) {
                    return config;
                }
            }
        }
        SiteConfig::default()
    }

    pub fn skipped_reports(&self) -> Vec<String> {
        self.site
            .as_ref()
            .and_then(|s| s.skip.clone())
            .unwrap_or_default()
    }
}
