use std::fs::File;
use std::io::Error as IoError;
use std::path::Path;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_yaml::Error as SerdeYamlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: IoError },
    #[error("invalid yaml in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: SerdeYamlError,
    },
    #[error("kubeconfig has no current context")]
    NoCurrentContext,
    #[error("home directory not found")]
    NoHomeDir,
}

/// decode a yaml file, errors name the file
pub(crate) fn read_yaml<T, P>(path: P) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_reader(file).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
