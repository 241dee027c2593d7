use serde::Deserialize;
use serde::Serialize;

use crate::Crd;
use crate::CrdNames;
use crate::DefaultHeader;
use crate::DefaultStatus;
use crate::Spec;
use crate::TEKTON_GROUP;
use crate::V1ALPHA1;

const API: Crd = Crd {
    group: TEKTON_GROUP,
    version: V1ALPHA1,
    names: CrdNames {
        kind: "PipelineResource",
        plural: "pipelineresources",
        singular: "pipelineresource",
    },
};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineResourceSpec {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ResourceParam>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<SecretParam>,
}

impl Spec for PipelineResourceSpec {
    type Status = DefaultStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &API
    }
}

impl PipelineResourceSpec {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.value.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceParam {
    pub name: String,
    pub value: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecretParam {
    pub field_name: String,
    pub secret_key: String,
    pub secret_name: String,
}
