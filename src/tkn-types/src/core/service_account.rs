use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;

use crate::Crd;
use crate::CrdNames;
use crate::Header;
use crate::ResourceObject;
use crate::Spec;
use crate::Status;

const API: Crd = Crd {
    group: "core",
    version: "v1",
    names: CrdNames {
        kind: "ServiceAccount",
        plural: "serviceaccounts",
        singular: "serviceaccount",
    },
};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountSpec {}

impl Spec for ServiceAccountSpec {
    type Status = ServiceAccountStatus;
    type Header = ServiceAccountHeader;
    fn metadata() -> &'static Crd {
        &API
    }

    fn is_absent(&self) -> bool {
        true
    }
}

#[derive(Deserialize, Serialize, Eq, PartialEq, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceAccountStatus {}

impl Status for ServiceAccountStatus {
    fn is_absent(&self) -> bool {
        true
    }
}

/// secrets mounted by pods running as this account
#[derive(Deserialize, Serialize, Eq, PartialEq, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceAccountHeader {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<SecretReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image_pull_secrets: Vec<SecretReference>,
}

impl Header for ServiceAccountHeader {}

#[derive(Deserialize, Serialize, Eq, PartialEq, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SecretReference {
    pub name: String,
}

/// Add a `secrets` reference to a service account read as a dynamic object,
/// leaving every other field as the server returned it.
/// Returns false when the account already references the secret.
pub fn add_secret_reference(account: &mut ResourceObject, name: &str) -> bool {
    let secrets = account
        .fields
        .entry("secrets")
        .or_insert_with(|| Value::Array(vec![]));
    if !secrets.is_array() {
        *secrets = Value::Array(vec![]);
    }
    let Value::Array(references) = secrets else {
        return false;
    };
    if references
        .iter()
        .any(|reference| reference.get("name").and_then(Value::as_str) == Some(name))
    {
        return false;
    }
    references.push(json!({ "name": name }));
    true
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::add_secret_reference;
    use super::ServiceAccountSpec;
    use crate::K8Obj;
    use crate::ObjectMeta;
    use crate::ResourceObject;

    #[test]
    fn test_add_secret_reference_once() {
        let mut account = ResourceObject::new(ObjectMeta::new("pipeline", "default"));
        assert!(add_secret_reference(&mut account, "git-creds"));
        assert!(!add_secret_reference(&mut account, "git-creds"));
        assert!(add_secret_reference(&mut account, "registry"));
        assert_eq!(
            account.field("secrets"),
            Some(&json!([{ "name": "git-creds" }, { "name": "registry" }]))
        );
    }

    #[test]
    fn test_add_secret_reference_keeps_other_fields() {
        let value = json!({
            "apiVersion": "v1",
            "kind": "ServiceAccount",
            "metadata": {
                "name": "pipeline",
                "namespace": "default",
                "ownerReferences": [{ "kind": "Deployment", "name": "tekton" }],
                "finalizers": ["tekton.dev/cleanup"]
            },
            "automountServiceAccountToken": false,
            "secrets": [{ "name": "default-token", "namespace": "default" }]
        });
        let mut account: ResourceObject = serde_json::from_value(value).expect("decode");
        assert!(add_secret_reference(&mut account, "registry"));

        let encoded = serde_json::to_value(&account).expect("encode");
        assert_eq!(encoded["automountServiceAccountToken"], json!(false));
        assert_eq!(encoded["metadata"]["finalizers"], json!(["tekton.dev/cleanup"]));
        assert_eq!(encoded["metadata"]["ownerReferences"][0]["name"], json!("tekton"));
        assert_eq!(
            encoded["secrets"],
            json!([
                { "name": "default-token", "namespace": "default" },
                { "name": "registry" }
            ])
        );
        assert!(encoded.get("spec").is_none());
    }

    #[test]
    fn test_typed_account_has_no_spec_or_status() {
        let account = K8Obj::new("pipeline", ServiceAccountSpec {});
        let encoded = serde_json::to_value(&account).expect("encode");
        assert!(encoded.get("spec").is_none());
        assert!(encoded.get("status").is_none());
    }
}
