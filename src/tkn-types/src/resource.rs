//!
//! # Dynamic resources
//!
//! Objects whose kind is only known at runtime, as shown by the generic
//! resource list of the dashboard.
//!
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::K8Obj;
use crate::ObjectMeta;
use crate::Spec;
use crate::CORE_GROUP;

/// Identifies a list of resources: api group, version, plural type and
/// optional namespace. No namespace means cluster scope or all namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ResourceIdentity {
    pub group: String,
    pub version: String,
    pub kind: String,
    pub namespace: Option<String>,
}

impl ResourceIdentity {
    pub fn new<G, V, K>(group: G, version: V, kind: K) -> Self
    where
        G: Into<String>,
        V: Into<String>,
        K: Into<String>,
    {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
            namespace: None,
        }
    }

    pub fn in_namespace<N: Into<String>>(mut self, namespace: N) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// identity of spec's resource type, cluster scoped specs ignore namespace
    pub fn for_spec<S: Spec>(namespace: Option<&str>) -> Self {
        let crd = S::metadata();
        let identity = Self::new(crd.group, crd.version, crd.names.plural);
        match namespace {
            Some(ns) if S::NAME_SPACED => identity.in_namespace(ns),
            _ => identity,
        }
    }

    pub fn is_namespaced(&self) -> bool {
        self.namespace.is_some()
    }

    /// `apiVersion` carried by objects of this type
    pub fn api_version(&self) -> String {
        if self.group == CORE_GROUP {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// same type, no namespace
    pub fn all_namespaces(&self) -> Self {
        Self {
            namespace: None,
            ..self.clone()
        }
    }

    /// REST path of the collection
    /// if group is core then /api is used otherwise /apis + group
    pub fn api_path(&self) -> String {
        let api_prefix = if self.group == CORE_GROUP {
            "api".to_owned()
        } else {
            format!("apis/{}", self.group)
        };

        match &self.namespace {
            Some(ns) => format!(
                "/{}/{}/namespaces/{}/{}",
                api_prefix, self.version, ns, self.kind
            ),
            None => format!("/{}/{}/{}", api_prefix, self.version, self.kind),
        }
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}/{}/{} in {}", self.group, self.version, self.kind, ns),
            None => write!(f, "{}/{}/{}", self.group, self.version, self.kind),
        }
    }
}

/// resource of any kind, fields other than metadata are kept verbatim
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceObject {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ResourceObject {
    pub fn new(metadata: ObjectMeta) -> Self {
        Self {
            metadata,
            ..Default::default()
        }
    }

    pub fn uid(&self) -> &str {
        &self.metadata.uid
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn set_field<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn from_k8<S: Spec>(obj: &K8Obj<S>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(obj)?)
    }

    pub fn into_k8<S: Spec>(self) -> Result<K8Obj<S>, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}

/// change notification pushed over the watch socket
#[allow(clippy::upper_case_acronyms)]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "object")]
pub enum ResourceWatch {
    ADDED(ResourceObject),
    MODIFIED(ResourceObject),
    DELETED(ResourceObject),
}

impl ResourceWatch {
    pub fn object(&self) -> &ResourceObject {
        match self {
            Self::ADDED(obj) | Self::MODIFIED(obj) | Self::DELETED(obj) => obj,
        }
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::ResourceIdentity;
    use super::ResourceObject;
    use super::ResourceWatch;

    #[test]
    fn test_identity_equality_by_value() {
        let first = ResourceIdentity::new("tekton.dev", "v1alpha1", "tasks").in_namespace("default");
        let second =
            ResourceIdentity::new("tekton.dev".to_owned(), "v1alpha1", "tasks").in_namespace("default");
        assert_eq!(first, second);
        assert_ne!(first, first.all_namespaces());
    }

    #[test]
    fn test_api_path_group() {
        let identity = ResourceIdentity::new("tekton.dev", "v1alpha1", "pipelineresources")
            .in_namespace("default");
        assert_eq!(
            identity.api_path(),
            "/apis/tekton.dev/v1alpha1/namespaces/default/pipelineresources"
        );
        assert_eq!(
            identity.all_namespaces().api_path(),
            "/apis/tekton.dev/v1alpha1/pipelineresources"
        );
    }

    #[test]
    fn test_api_path_core() {
        let identity = ResourceIdentity::new("core", "v1", "secrets").in_namespace("default");
        assert_eq!(identity.api_path(), "/api/v1/namespaces/default/secrets");
        assert_eq!(identity.to_string(), "core/v1/secrets in default");
        assert_eq!(identity.api_version(), "v1");
        assert_eq!(
            ResourceIdentity::new("tekton.dev", "v1alpha1", "tasks").api_version(),
            "tekton.dev/v1alpha1"
        );
    }

    #[test]
    fn test_object_keeps_unknown_fields() {
        let value = json!({
            "apiVersion": "tekton.dev/v1alpha1",
            "kind": "Task",
            "metadata": {
                "name": "build",
                "namespace": "default",
                "uid": "uid-1",
                "creationTimestamp": "2019-05-02T13:50:08Z"
            },
            "spec": { "steps": [] }
        });

        let obj: ResourceObject = serde_json::from_value(value.clone()).expect("decode");
        assert_eq!(obj.uid(), "uid-1");
        assert_eq!(obj.field("spec"), Some(&json!({ "steps": [] })));
        assert_eq!(serde_json::to_value(&obj).expect("encode"), value);
    }

    #[test]
    fn test_watch_event_decode() {
        let event = json!({
            "type": "DELETED",
            "object": { "metadata": { "name": "build", "uid": "uid-1" } }
        });

        let watch: ResourceWatch = serde_json::from_value(event).expect("decode");
        assert!(matches!(watch, ResourceWatch::DELETED(_)));
        assert_eq!(watch.object().name(), "build");
    }
}
