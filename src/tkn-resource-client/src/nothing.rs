// implementation of resource client that does nothing
// it is used for testing where to satisfy resource client contract
use std::fmt;
use std::io::Error as IoError;

use async_trait::async_trait;

use tkn_types::ResourceIdentity;
use tkn_types::ResourceObject;

use crate::ResourceClient;
use crate::ResourceClientError;

#[derive(Debug)]
pub enum DoNothingError {
    IoError(IoError),
    JsonError(serde_json::Error),
    NotFound,
}

impl From<IoError> for DoNothingError {
    fn from(error: IoError) -> Self {
        Self::IoError(error)
    }
}

impl From<serde_json::Error> for DoNothingError {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonError(error)
    }
}

impl fmt::Display for DoNothingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IoError(err) => write!(f, "io: {}", err),
            Self::JsonError(err) => write!(f, "{}", err),
            Self::NotFound => write!(f, "not found"),
        }
    }
}

impl ResourceClientError for DoNothingError {
    fn not_founded(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub struct DoNothingClient();

#[async_trait]
impl ResourceClient for DoNothingClient {
    type ResourceClientError = DoNothingError;

    async fn retrieve_items(
        &self,
        _identity: &ResourceIdentity,
    ) -> Result<Vec<ResourceObject>, Self::ResourceClientError> {
        Err(DoNothingError::NotFound)
    }

    async fn retrieve_object(
        &self,
        _identity: &ResourceIdentity,
        _name: &str,
    ) -> Result<ResourceObject, Self::ResourceClientError> {
        Err(DoNothingError::NotFound)
    }

    async fn create_object(
        &self,
        _identity: &ResourceIdentity,
        _value: ResourceObject,
    ) -> Result<ResourceObject, Self::ResourceClientError> {
        Err(DoNothingError::NotFound)
    }

    async fn replace_object(
        &self,
        _identity: &ResourceIdentity,
        _value: ResourceObject,
    ) -> Result<ResourceObject, Self::ResourceClientError> {
        Err(DoNothingError::NotFound)
    }
}
