use std::collections::HashMap;
use std::fmt;
use std::io::Error as IoError;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use tracing::trace;

use tkn_types::ResourceIdentity;
use tkn_types::ResourceObject;

use crate::ResourceClient;
use crate::ResourceClientError;

#[derive(Debug)]
pub enum InMemoryError {
    IoError(IoError),
    JsonError(serde_json::Error),
    LockPoisonError,
    AlreadyExists(String),
    NotFound,
}

impl From<IoError> for InMemoryError {
    fn from(error: IoError) -> Self {
        Self::IoError(error)
    }
}

impl From<serde_json::Error> for InMemoryError {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonError(error)
    }
}

type ReadPoisonError<'a> = PoisonError<RwLockReadGuard<'a, ItemMap>>;

impl<'a> From<ReadPoisonError<'a>> for InMemoryError {
    fn from(_error: ReadPoisonError) -> Self {
        Self::LockPoisonError
    }
}

type WritePoisonError<'a> = PoisonError<RwLockWriteGuard<'a, ItemMap>>;

impl<'a> From<WritePoisonError<'a>> for InMemoryError {
    fn from(_error: WritePoisonError) -> Self {
        Self::LockPoisonError
    }
}

impl fmt::Display for InMemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IoError(err) => write!(f, "io: {}", err),
            Self::JsonError(err) => write!(f, "{}", err),
            Self::NotFound => write!(f, "not found"),
            Self::AlreadyExists(name) => write!(f, "{} already exists", name),
            Self::LockPoisonError => write!(f, "lock poison error"),
        }
    }
}

impl std::error::Error for InMemoryError {}

impl ResourceClientError for InMemoryError {
    fn not_founded(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ItemKey {
    group: String,
    version: String,
    kind: String,
    ns: String,
    name: String,
}

impl ItemKey {
    fn new(identity: &ResourceIdentity, namespace: &str, name: &str) -> Self {
        ItemKey {
            group: identity.group.clone(),
            version: identity.version.clone(),
            kind: identity.kind.clone(),
            ns: namespace.to_owned(),
            name: name.to_owned(),
        }
    }

    fn matches(&self, identity: &ResourceIdentity) -> bool {
        self.group == identity.group
            && self.version == identity.version
            && self.kind == identity.kind
            && identity.namespace.as_ref().map_or(true, |ns| ns == &self.ns)
    }
}

#[derive(Debug)]
struct StoredItem {
    seq: u64,
    value: Value,
}

#[derive(Debug, Default)]
struct ItemMap {
    next_seq: u64,
    items: HashMap<ItemKey, StoredItem>,
}

/// Resource client backed by a map, items are listed in creation order
#[derive(Debug, Default)]
pub struct InMemoryClient {
    store: RwLock<ItemMap>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// store object under identity, uid and resource version are assigned when missing
    pub fn insert(
        &self,
        identity: &ResourceIdentity,
        mut object: ResourceObject,
    ) -> Result<ResourceObject, InMemoryError> {
        let mut store = self.store.write()?;
        if object.metadata.namespace.is_empty() {
            if let Some(ns) = &identity.namespace {
                object.metadata.namespace = ns.clone();
            }
        }
        let item_key = ItemKey::new(identity, &object.metadata.namespace, &object.metadata.name);
        if store.items.contains_key(&item_key) {
            return Err(InMemoryError::AlreadyExists(object.metadata.name));
        }

        store.next_seq += 1;
        let seq = store.next_seq;
        if object.metadata.uid.is_empty() {
            object.metadata.uid = format!("uid-{:08}", seq);
        }
        object.metadata.resource_version = seq.to_string();
        trace!("storing {}: {:#?}", identity, object);

        let value = serde_json::to_value(&object)?;
        store.items.insert(item_key, StoredItem { seq, value });
        Ok(object)
    }

    /// remove object, returns removed value
    pub fn remove(
        &self,
        identity: &ResourceIdentity,
        name: &str,
    ) -> Result<ResourceObject, InMemoryError> {
        let mut store = self.store.write()?;
        let namespace = identity.namespace.as_deref().unwrap_or_default();
        let item_key = ItemKey::new(identity, namespace, name);
        let item = store.items.remove(&item_key).ok_or(InMemoryError::NotFound)?;
        Ok(serde_json::from_value(item.value)?)
    }

    pub fn len(&self) -> Result<usize, InMemoryError> {
        Ok(self.store.read()?.items.len())
    }

    pub fn is_empty(&self) -> Result<bool, InMemoryError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl ResourceClient for InMemoryClient {
    type ResourceClientError = InMemoryError;

    async fn retrieve_items(
        &self,
        identity: &ResourceIdentity,
    ) -> Result<Vec<ResourceObject>, Self::ResourceClientError> {
        let store = self.store.read()?;
        let mut matched: Vec<&StoredItem> = store
            .items
            .iter()
            .filter(|(key, _)| key.matches(identity))
            .map(|(_, item)| item)
            .collect();
        matched.sort_by_key(|item| item.seq);
        debug!("{}: {} items", identity, matched.len());

        matched
            .into_iter()
            .map(|item| serde_json::from_value(item.value.clone()).map_err(InMemoryError::from))
            .collect()
    }

    async fn retrieve_object(
        &self,
        identity: &ResourceIdentity,
        name: &str,
    ) -> Result<ResourceObject, Self::ResourceClientError> {
        let store = self.store.read()?;
        let namespace = identity.namespace.as_deref().unwrap_or_default();
        let item_key = ItemKey::new(identity, namespace, name);
        let item = store.items.get(&item_key).ok_or(InMemoryError::NotFound)?;
        Ok(serde_json::from_value(item.value.clone())?)
    }

    async fn create_object(
        &self,
        identity: &ResourceIdentity,
        value: ResourceObject,
    ) -> Result<ResourceObject, Self::ResourceClientError> {
        self.insert(identity, value)
    }

    async fn replace_object(
        &self,
        identity: &ResourceIdentity,
        mut value: ResourceObject,
    ) -> Result<ResourceObject, Self::ResourceClientError> {
        let mut store = self.store.write()?;
        let namespace = identity.namespace.as_deref().unwrap_or_default();
        let item_key = ItemKey::new(identity, namespace, &value.metadata.name);
        let item = store.items.get(&item_key).ok_or(InMemoryError::NotFound)?;
        let existing: ResourceObject = serde_json::from_value(item.value.clone())?;
        value.metadata.uid = existing.metadata.uid;
        value.metadata.namespace = existing.metadata.namespace;

        // version only moves once the replace is known to succeed
        let version = store.next_seq + 1;
        value.metadata.resource_version = version.to_string();
        let encoded = serde_json::to_value(&value)?;
        store.next_seq = version;
        if let Some(item) = store.items.get_mut(&item_key) {
            item.value = encoded;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {

    use fluvio_future::test_async;
    use serde_json::json;

    use tkn_types::core::secret::SecretHeader;
    use tkn_types::core::secret::SecretSpec;
    use tkn_types::InputK8Obj;
    use tkn_types::InputObjectMeta;
    use tkn_types::ObjectMeta;
    use tkn_types::ResourceIdentity;
    use tkn_types::ResourceObject;

    use super::InMemoryClient;
    use super::InMemoryError;
    use crate::ResourceClient;

    fn tasks(namespace: &str) -> ResourceIdentity {
        ResourceIdentity::new("tekton.dev", "v1alpha1", "tasks").in_namespace(namespace)
    }

    fn task(name: &str) -> ResourceObject {
        ResourceObject::new(ObjectMeta::named(name)).set_field("spec", json!({ "steps": [] }))
    }

    #[test_async]
    async fn test_list_keeps_insertion_order() -> Result<(), InMemoryError> {
        let client = InMemoryClient::new();
        client.insert(&tasks("default"), task("zeta"))?;
        client.insert(&tasks("default"), task("alpha"))?;
        client.insert(&tasks("green"), task("beta"))?;

        let names: Vec<String> = client
            .retrieve_items(&tasks("default"))
            .await?
            .into_iter()
            .map(|item| item.metadata.name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);

        let all = client.retrieve_items(&tasks("default").all_namespaces()).await?;
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].metadata.namespace, "green");

        Ok(())
    }

    #[test_async]
    async fn test_create_assigns_uid() -> Result<(), InMemoryError> {
        let client = InMemoryClient::new();
        let created = client.create_object(&tasks("default"), task("build")).await?;
        assert!(!created.metadata.uid.is_empty());
        assert_eq!(created.metadata.namespace, "default");

        let err = client
            .create_object(&tasks("default"), task("build"))
            .await
            .expect_err("duplicate");
        assert!(matches!(err, InMemoryError::AlreadyExists(_)));

        Ok(())
    }

    #[test_async]
    async fn test_typed_create_and_retrieve_secret() -> Result<(), InMemoryError> {
        let client = InMemoryClient::new();
        let input = InputK8Obj::new(SecretSpec {}, InputObjectMeta::named("git-creds", "default"))
            .set_header(SecretHeader::basic_auth("tekton", "hunter2"));

        let created = client.create_item(input).await?;
        assert_eq!(created.header.ty, "kubernetes.io/basic-auth");

        let retrieved = client
            .retrieve_item::<SecretSpec>("default", "git-creds")
            .await?;
        assert_eq!(retrieved.metadata.uid, created.metadata.uid);
        assert_eq!(
            retrieved.header.string_data.get("username").map(String::as_str),
            Some("tekton")
        );

        let secrets = client.retrieve_items_of::<SecretSpec, _>("default").await?;
        assert_eq!(secrets.items.len(), 1);

        Ok(())
    }

    #[test_async]
    async fn test_replace_and_exists() -> Result<(), InMemoryError> {
        let client = InMemoryClient::new();
        let created = client.insert(&tasks("default"), task("build"))?;

        let updated = created.clone().set_field("spec", json!({ "steps": [{ "name": "compile" }] }));
        let replaced = client.replace_object(&tasks("default"), updated).await?;
        assert_eq!(replaced.metadata.uid, created.metadata.uid);
        assert_ne!(replaced.metadata.resource_version, created.metadata.resource_version);

        assert!(client.exists(&tasks("default"), "build").await?);
        assert!(!client.exists(&tasks("default"), "deploy").await?);

        client.remove(&tasks("default"), "build")?;
        assert!(client.is_empty()?);

        Ok(())
    }

    #[test_async]
    async fn test_failed_replace_keeps_versions() -> Result<(), InMemoryError> {
        let client = InMemoryClient::new();
        let first = client.insert(&tasks("default"), task("build"))?;

        let mut missing = task("deploy");
        missing.metadata.namespace = "default".to_owned();
        let err = client
            .replace_object(&tasks("default"), missing)
            .await
            .expect_err("not stored");
        assert!(matches!(err, InMemoryError::NotFound));
        assert!(!client.exists(&tasks("default"), "deploy").await?);

        let second = client.insert(&tasks("default"), task("lint"))?;
        assert_eq!(first.metadata.resource_version, "1");
        assert_eq!(second.metadata.resource_version, "2");

        Ok(())
    }
}
