use std::fmt::Debug;
use std::fmt::Display;
use std::io::Error as IoError;

use async_trait::async_trait;
use serde_json::Error as SerdeJsonError;
use tracing::debug;
use tracing::trace;

use tkn_types::{InputK8Obj, K8List, K8Obj, ResourceIdentity, ResourceObject, Spec};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameSpace {
    All,
    Named(String),
}

impl NameSpace {
    pub fn as_option(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl From<String> for NameSpace {
    fn from(namespace: String) -> Self {
        NameSpace::Named(namespace)
    }
}

impl From<&str> for NameSpace {
    fn from(namespace: &str) -> Self {
        NameSpace::Named(namespace.to_owned())
    }
}

impl From<Option<String>> for NameSpace {
    fn from(namespace: Option<String>) -> Self {
        match namespace {
            Some(name) => NameSpace::Named(name),
            None => NameSpace::All,
        }
    }
}

fn non_empty(namespace: &str) -> Option<&str> {
    Some(namespace).filter(|ns| !ns.is_empty())
}

/// trait for resource client errors
pub trait ResourceClientError: Debug + Display {
    /// is not founded
    fn not_founded(&self) -> bool;
}

/// Access to cluster resources. Implementations decide how the api server is reached.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    type ResourceClientError: ResourceClientError
        + Send
        + Sync
        + From<IoError>
        + From<SerdeJsonError>;

    /// retrieve all items of identity, in server order
    async fn retrieve_items(
        &self,
        identity: &ResourceIdentity,
    ) -> Result<Vec<ResourceObject>, Self::ResourceClientError>;

    /// retrieve a single item
    async fn retrieve_object(
        &self,
        identity: &ResourceIdentity,
        name: &str,
    ) -> Result<ResourceObject, Self::ResourceClientError>;

    /// create new object
    async fn create_object(
        &self,
        identity: &ResourceIdentity,
        value: ResourceObject,
    ) -> Result<ResourceObject, Self::ResourceClientError>;

    /// replace existing object
    async fn replace_object(
        &self,
        identity: &ResourceIdentity,
        value: ResourceObject,
    ) -> Result<ResourceObject, Self::ResourceClientError>;

    async fn retrieve_items_of<S, N>(
        &self,
        namespace: N,
    ) -> Result<K8List<S>, Self::ResourceClientError>
    where
        S: Spec,
        N: Into<NameSpace> + Send + Sync,
    {
        let namespace: NameSpace = namespace.into();
        let identity = ResourceIdentity::for_spec::<S>(namespace.as_option());
        let objects = self.retrieve_items(&identity).await?;
        trace!("{}: retrieved {} items", S::label(), objects.len());
        let items = objects
            .into_iter()
            .map(|object| object.into_k8::<S>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(K8List::with_items(items))
    }

    async fn retrieve_item<S>(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<K8Obj<S>, Self::ResourceClientError>
    where
        S: Spec,
    {
        let identity = ResourceIdentity::for_spec::<S>(Some(namespace));
        let object = self.retrieve_object(&identity, name).await?;
        Ok(object.into_k8()?)
    }

    async fn create_item<S>(
        &self,
        value: InputK8Obj<S>,
    ) -> Result<K8Obj<S>, Self::ResourceClientError>
    where
        S: Spec,
    {
        debug!("{}: creating '{}'", S::label(), value.metadata);
        let identity = ResourceIdentity::for_spec::<S>(non_empty(&value.metadata.namespace));
        let object: ResourceObject = serde_json::from_value(serde_json::to_value(&value)?)?;
        let created = self.create_object(&identity, object).await?;
        Ok(created.into_k8()?)
    }

    async fn replace_item<S>(&self, value: K8Obj<S>) -> Result<K8Obj<S>, Self::ResourceClientError>
    where
        S: Spec,
    {
        debug!("{}: replacing '{}'", S::label(), value.metadata.name);
        let identity = ResourceIdentity::for_spec::<S>(non_empty(&value.metadata.namespace));
        let object = ResourceObject::from_k8(&value)?;
        let replaced = self.replace_object(&identity, object).await?;
        Ok(replaced.into_k8()?)
    }

    /// Check if the object exists, return true or false.
    async fn exists(
        &self,
        identity: &ResourceIdentity,
        name: &str,
    ) -> Result<bool, Self::ResourceClientError> {
        debug!("check if '{}' exists in {}", name, identity);
        match self.retrieve_object(identity, name).await {
            Ok(_) => Ok(true),
            Err(err) => {
                if err.not_founded() {
                    Ok(false)
                } else {
                    Err(err)
                }
            }
        }
    }
}
