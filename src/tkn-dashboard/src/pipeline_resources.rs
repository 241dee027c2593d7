//!
//! # PipelineResources table
//!
//! Rows of the PipelineResources page, built from typed resources.
//!
use tkn_types::pipeline::resource::PipelineResourceSpec;
use tkn_types::K8Obj;
use tkn_types::ObjectMeta;
use tkn_types::ResourceObject;

use crate::list::EmptyState;
use crate::urls;
use crate::NamespaceSelection;

pub const PIPELINE_RESOURCES_KIND: &str = "PipelineResources";

type DisplayName<'a> = Box<dyn Fn(&ObjectMeta) -> String + 'a>;
type ResourceUrl<'a> = Box<dyn Fn(&str, &str) -> Option<String> + 'a>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResourceRow {
    pub id: String,
    pub name: String,
    pub namespace: String,
    pub ty: String,
    pub url: Option<String>,
}

/// How rows are labelled and linked. Url builder receives namespace and display name.
pub struct PipelineResourceFormat<'a> {
    display_name: DisplayName<'a>,
    url: ResourceUrl<'a>,
}

impl Default for PipelineResourceFormat<'_> {
    fn default() -> Self {
        Self {
            display_name: Box::new(|metadata: &ObjectMeta| metadata.name.clone()),
            url: Box::new(|namespace: &str, name: &str| {
                Some(urls::pipeline_resource_by_name(namespace, name))
            }),
        }
    }
}

impl<'a> PipelineResourceFormat<'a> {
    pub fn with_display_name<F>(mut self, display_name: F) -> Self
    where
        F: Fn(&ObjectMeta) -> String + 'a,
    {
        self.display_name = Box::new(display_name);
        self
    }

    pub fn with_url<F>(mut self, url: F) -> Self
    where
        F: Fn(&str, &str) -> Option<String> + 'a,
    {
        self.url = Box::new(url);
        self
    }

    /// rows without links
    pub fn without_urls(self) -> Self {
        self.with_url(|_, _| None)
    }
}

pub fn format_pipeline_resources(
    resources: &[K8Obj<PipelineResourceSpec>],
    format: &PipelineResourceFormat,
) -> Vec<PipelineResourceRow> {
    resources
        .iter()
        .map(|resource| {
            let name = (format.display_name)(&resource.metadata);
            let url = (format.url)(&resource.metadata.namespace, &name);
            PipelineResourceRow {
                id: resource.metadata.uid.clone(),
                namespace: resource.metadata.namespace.clone(),
                ty: resource.spec.ty.clone(),
                name,
                url,
            }
        })
        .collect()
}

/// typed view of items loaded by the generic list
pub fn decode_pipeline_resources(
    objects: &[ResourceObject],
) -> Result<Vec<K8Obj<PipelineResourceSpec>>, serde_json::Error> {
    objects
        .iter()
        .cloned()
        .map(ResourceObject::into_k8::<PipelineResourceSpec>)
        .collect()
}

pub fn pipeline_resources_empty_text(selection: &NamespaceSelection) -> String {
    EmptyState::for_selection(PIPELINE_RESOURCES_KIND, selection).to_string()
}
