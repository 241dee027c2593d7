//! Links to the detail pages of the dashboard.

/// detail page of a namespaced resource of any type
pub fn resource_by_name(
    namespace: &str,
    group: &str,
    version: &str,
    ty: &str,
    name: &str,
) -> String {
    format!(
        "/namespaces/{}/{}/{}/{}/{}",
        namespace, group, version, ty, name
    )
}

/// detail page of a cluster scoped resource of any type
pub fn cluster_resource_by_name(group: &str, version: &str, ty: &str, name: &str) -> String {
    format!("/{}/{}/{}/{}", group, version, ty, name)
}

pub fn pipeline_resource_by_name(namespace: &str, name: &str) -> String {
    format!("/namespaces/{}/pipelineresources/{}", namespace, name)
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_resource_links() {
        assert_eq!(
            resource_by_name("default", "tekton.dev", "v1alpha1", "tasks", "build"),
            "/namespaces/default/tekton.dev/v1alpha1/tasks/build"
        );
        assert_eq!(
            cluster_resource_by_name("tekton.dev", "v1alpha1", "clustertasks", "lint"),
            "/tekton.dev/v1alpha1/clustertasks/lint"
        );
        assert_eq!(
            pipeline_resource_by_name("default", "git-source"),
            "/namespaces/default/pipelineresources/git-source"
        );
    }
}
