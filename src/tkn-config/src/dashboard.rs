use std::path::Path;
use std::path::PathBuf;

use dirs::home_dir;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::info;

use crate::error::read_yaml;
use crate::ConfigError;
use crate::KubeConfig;

pub const CONFIG_ENV: &str = "TKN_DASHBOARD_CONFIG";
pub const NAMESPACE_ENV: &str = "TKN_DASHBOARD_NAMESPACE";
pub const ALL_NAMESPACES: &str = "*";
const CONFIG_DIR: &str = ".tkn-dashboard";
const CONFIG_FILE: &str = "config.yaml";

/// dashboard settings, read from yaml
#[derive(Debug, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DashboardConfig {
    #[serde(skip)]
    pub path: Option<PathBuf>,
    /// namespace selected on start, `*` selects all namespaces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,
    pub read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<PathBuf>,
}

impl DashboardConfig {
    pub fn from_file<T: AsRef<Path>>(path: T) -> Result<Self, ConfigError> {
        debug!("reading dashboard config: {}", path.as_ref().display());
        let mut config: Self = read_yaml(path.as_ref())?;
        config.path = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// load from TKN_DASHBOARD_CONFIG or $HOME/.tkn-dashboard/config.yaml,
    /// a missing default file yields default settings
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => match home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE)) {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => {
                    info!("no dashboard config found, using defaults");
                    Self::default()
                }
            },
        };
        Ok(config.with_namespace_override(std::env::var(NAMESPACE_ENV).ok()))
    }

    pub fn with_namespace_override(mut self, namespace: Option<String>) -> Self {
        if let Some(namespace) = namespace.filter(|ns| !ns.is_empty()) {
            debug!("namespace override: {}", namespace);
            self.default_namespace = Some(namespace);
        }
        self
    }

    /// namespace to select on start; `None` means all namespaces.
    /// falls back to the namespace of the current kubeconfig context
    pub fn initial_namespace(&self, kube: Option<&KubeConfig>) -> Option<String> {
        match self.default_namespace.as_deref() {
            Some(ALL_NAMESPACES) => None,
            Some(namespace) => Some(namespace.to_owned()),
            None => kube
                .and_then(|config| config.current_namespace().ok().flatten())
                .map(str::to_owned),
        }
    }

    /// kubeconfig named by settings or the default location, if readable
    pub fn kube_config(&self) -> Option<KubeConfig> {
        let path = match &self.kubeconfig {
            Some(path) => path.clone(),
            None => KubeConfig::default_path().ok()?,
        };
        match KubeConfig::from_file(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                debug!("kubeconfig {} not used: {}", path.display(), err);
                None
            }
        }
    }
}
