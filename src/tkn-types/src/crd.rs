//!
//! # CRD Definition
//!
//! Group, version and names of a resource type as the API server knows it
//!
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Crd {
    pub group: &'static str,
    pub version: &'static str,
    pub names: CrdNames,
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CrdNames {
    pub kind: &'static str,
    pub plural: &'static str,
    pub singular: &'static str,
}

pub const CORE_GROUP: &str = "core";
pub const TEKTON_GROUP: &str = "tekton.dev";
pub const V1: &str = "v1";
pub const V1ALPHA1: &str = "v1alpha1";
