use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::Crd;
use crate::CrdNames;
use crate::Header;
use crate::Spec;
use crate::Status;

pub const TYPE_OPAQUE: &str = "Opaque";
pub const TYPE_BASIC_AUTH: &str = "kubernetes.io/basic-auth";

//
// Secret Object
const SECRET_API: Crd = Crd {
    group: "core",
    version: "v1",
    names: CrdNames {
        kind: "Secret",
        plural: "secrets",
        singular: "secret",
    },
};

impl Spec for SecretSpec {
    type Status = SecretStatus;
    type Header = SecretHeader;

    fn metadata() -> &'static Crd {
        &SECRET_API
    }

    fn is_absent(&self) -> bool {
        true
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SecretSpec {}

#[derive(Deserialize, Serialize, Default, Eq, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SecretStatus {}

impl Status for SecretStatus {
    fn is_absent(&self) -> bool {
        true
    }
}

/// secret payload lives next to metadata, not under spec
#[derive(Deserialize, Serialize, Debug, Default, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SecretHeader {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub string_data: BTreeMap<String, String>,
    #[serde(rename = "type", default)]
    pub ty: String,
}

impl Header for SecretHeader {}

impl SecretHeader {
    pub fn basic_auth<U, P>(username: U, password: P) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        let mut string_data = BTreeMap::new();
        string_data.insert("username".to_owned(), username.into());
        string_data.insert("password".to_owned(), password.into());
        Self {
            string_data,
            ty: TYPE_BASIC_AUTH.to_owned(),
            ..Default::default()
        }
    }
}
