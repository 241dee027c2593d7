use std::path::Path;
use std::path::PathBuf;

use dirs::home_dir;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::error::read_yaml;
use crate::ConfigError;

pub const KUBECONFIG: &str = "KUBECONFIG";

#[derive(Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub name: String,
    pub context: ContextDetail,
}

#[derive(Debug, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct ContextDetail {
    pub cluster: String,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// subset of kubeconfig the dashboard needs: which namespace the user works in
#[derive(Debug, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KubeConfig {
    #[serde(skip)]
    pub path: PathBuf,
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    #[serde(default)]
    pub contexts: Vec<Context>,
    #[serde(default)]
    pub current_context: String,
    pub kind: String,
}

impl KubeConfig {
    /// read from default home directory
    pub fn from_home() -> Result<Self, ConfigError> {
        Self::from_file(Self::default_path()?)
    }

    /// path from KUBECONFIG env var or $HOME/.kube/config
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(KUBECONFIG) {
            return Ok(PathBuf::from(path));
        }
        let home_dir = home_dir()
            .ok_or(ConfigError::NoHomeDir)?;
        Ok(home_dir.join(".kube").join("config"))
    }

    pub fn from_file<T: AsRef<Path>>(path: T) -> Result<Self, ConfigError> {
        debug!("reading kubeconfig: {}", path.as_ref().display());
        let mut config: Self = read_yaml(path.as_ref())?;
        config.path = path.as_ref().to_path_buf();
        Ok(config)
    }

    pub fn current_context(&self) -> Option<&Context> {
        self.contexts
            .iter()
            .find(|c| c.name == self.current_context)
    }

    /// namespace set on the current context, if any
    pub fn current_namespace(&self) -> Result<Option<&str>, ConfigError> {
        let ctx = self.current_context().ok_or(ConfigError::NoCurrentContext)?;
        Ok(ctx.context.namespace.as_deref())
    }
}
