use thiserror::Error;
use tracing::debug;
use tracing::info;

use tkn_resource_client::ResourceClient;
use tkn_types::core::secret::SecretHeader;
use tkn_types::core::secret::SecretSpec;
use tkn_types::core::service_account::add_secret_reference;
use tkn_types::core::service_account::ServiceAccountSpec;
use tkn_types::InputK8Obj;
use tkn_types::InputObjectMeta;
use tkn_types::K8Obj;
use tkn_types::ResourceIdentity;

use crate::secret::SecretForm;
use crate::secret::SecretKind;

/// annotation telling tekton which registry the credentials are for
pub const DOCKER_ANNOTATION: &str = "tekton.dev/docker-0";

/// validated form, ready to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRequest {
    pub name: String,
    pub namespace: String,
    pub username: String,
    pub password: String,
    pub service_accounts: Vec<String>,
    pub kind: SecretKind,
}

impl SecretRequest {
    pub(crate) fn from_valid(form: &SecretForm) -> Self {
        Self {
            name: form.name.clone(),
            namespace: form.namespace.clone().unwrap_or_default(),
            username: form.username.clone(),
            password: form.password.clone(),
            service_accounts: form.service_accounts.iter().cloned().collect(),
            kind: form.kind.clone(),
        }
    }

    pub fn to_input(&self) -> InputK8Obj<SecretSpec> {
        let mut metadata = InputObjectMeta::named(self.name.as_str(), self.namespace.as_str());
        if let Some(server_url) = self.kind.server_url() {
            metadata = metadata.set_annotation(DOCKER_ANNOTATION, server_url);
        }
        InputK8Obj::new(SecretSpec {}, metadata)
            .set_header(SecretHeader::basic_auth(self.username.as_str(), self.password.as_str()))
    }
}

#[derive(Error, Debug)]
pub enum SecretCreateError<E> {
    #[error("unable to create secret: {0}")]
    Create(E),
    #[error("unable to update service account {name}: {error}")]
    ServiceAccount { name: String, error: E },
}

/// Create the secret and attach it to the selected service accounts.
///
/// Every account is read before anything is written, so a missing account
/// leaves the cluster untouched. An existing secret of the same name is
/// reused, which lets a partially failed submit be retried.
pub async fn create_secret<C>(
    client: &C,
    request: &SecretRequest,
) -> Result<K8Obj<SecretSpec>, SecretCreateError<C::ResourceClientError>>
where
    C: ResourceClient,
{
    let account_identity =
        ResourceIdentity::for_spec::<ServiceAccountSpec>(Some(&request.namespace));
    let mut accounts = Vec::with_capacity(request.service_accounts.len());
    for account_name in &request.service_accounts {
        let account = client
            .retrieve_object(&account_identity, account_name)
            .await
            .map_err(|error| SecretCreateError::ServiceAccount {
                name: account_name.clone(),
                error,
            })?;
        accounts.push(account);
    }

    let identity = ResourceIdentity::for_spec::<SecretSpec>(Some(&request.namespace));
    let secret = if client
        .exists(&identity, &request.name)
        .await
        .map_err(SecretCreateError::Create)?
    {
        debug!("secret {}:{} exists, reusing it", request.namespace, request.name);
        client
            .retrieve_item::<SecretSpec>(&request.namespace, &request.name)
            .await
            .map_err(SecretCreateError::Create)?
    } else {
        let secret = client
            .create_item(request.to_input())
            .await
            .map_err(SecretCreateError::Create)?;
        info!("created secret {}:{}", request.namespace, request.name);
        secret
    };

    for mut account in accounts {
        let account_name = account.name().to_owned();
        if !add_secret_reference(&mut account, &request.name) {
            debug!("service account {} already has {}", account_name, request.name);
            continue;
        }
        client
            .replace_object(&account_identity, account)
            .await
            .map_err(|error| SecretCreateError::ServiceAccount {
                name: account_name.clone(),
                error,
            })?;
        debug!("attached {} to service account {}", request.name, account_name);
    }

    Ok(secret)
}
