use tracing::debug;

use tkn_resource_client::NameSpace;
use tkn_resource_client::ResourceClient;
use tkn_types::core::namespace::NamespaceSpec;
use tkn_types::core::service_account::ServiceAccountSpec;
use tkn_types::K8List;
use tkn_types::Spec;

fn sorted_names<S: Spec>(list: K8List<S>) -> Vec<String> {
    let mut names: Vec<String> = list
        .items
        .into_iter()
        .map(|item| item.metadata.name)
        .collect();
    names.sort();
    names
}

/// choices of the namespace dropdown
pub async fn namespace_names<C>(client: &C) -> Result<Vec<String>, C::ResourceClientError>
where
    C: ResourceClient,
{
    let namespaces = client
        .retrieve_items_of::<NamespaceSpec, _>(NameSpace::All)
        .await?;
    debug!("{} namespaces", namespaces.items.len());
    Ok(sorted_names(namespaces))
}

/// choices of the service account multi select
pub async fn service_account_names<C>(
    client: &C,
    namespace: &str,
) -> Result<Vec<String>, C::ResourceClientError>
where
    C: ResourceClient,
{
    let accounts = client
        .retrieve_items_of::<ServiceAccountSpec, _>(namespace)
        .await?;
    debug!("{} service accounts in {}", accounts.items.len(), namespace);
    Ok(sorted_names(accounts))
}

/// everything the form offers to pick from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretFormOptions {
    pub namespaces: Vec<String>,
    pub service_accounts: Vec<String>,
}

impl SecretFormOptions {
    /// service accounts are only loaded once a namespace is picked
    pub async fn load<C>(
        client: &C,
        namespace: Option<&str>,
    ) -> Result<Self, C::ResourceClientError>
    where
        C: ResourceClient,
    {
        let namespaces = namespace_names(client).await?;
        let service_accounts = match namespace {
            Some(namespace) => service_account_names(client, namespace).await?,
            None => vec![],
        };
        Ok(Self {
            namespaces,
            service_accounts,
        })
    }
}
