use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// kind of credentials stored by the secret
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SecretKind {
    #[default]
    BasicAuth,
    DockerRegistry {
        #[serde(rename = "serverUrl", default)]
        server_url: String,
    },
}

impl SecretKind {
    pub fn tag(&self) -> SecretKindTag {
        match self {
            Self::BasicAuth => SecretKindTag::BasicAuth,
            Self::DockerRegistry { .. } => SecretKindTag::DockerRegistry,
        }
    }

    pub fn server_url(&self) -> Option<&str> {
        match self {
            Self::BasicAuth => None,
            Self::DockerRegistry { server_url } => Some(server_url),
        }
    }
}

/// kind selected by the access-to radio buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKindTag {
    BasicAuth,
    DockerRegistry,
}

impl From<SecretKindTag> for SecretKind {
    fn from(tag: SecretKindTag) -> Self {
        match tag {
            SecretKindTag::BasicAuth => Self::BasicAuth,
            SecretKindTag::DockerRegistry => Self::DockerRegistry {
                server_url: String::new(),
            },
        }
    }
}

/// values entered in the create secret form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretForm {
    pub name: String,
    pub namespace: Option<String>,
    pub username: String,
    pub password: String,
    pub service_accounts: BTreeSet<String>,
    pub kind: SecretKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SecretField {
    Name,
    Namespace,
    Username,
    Password,
    ServiceAccounts,
    ServerUrl,
}

impl SecretField {
    pub const ALL: [SecretField; 6] = [
        Self::Name,
        Self::Namespace,
        Self::Username,
        Self::Password,
        Self::ServiceAccounts,
        Self::ServerUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Namespace => "namespace",
            Self::Username => "username",
            Self::Password => "password",
            Self::ServiceAccounts => "serviceAccounts",
            Self::ServerUrl => "serverUrl",
        }
    }
}

impl fmt::Display for SecretField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_decode_docker_form() {
        let form: SecretForm = serde_json::from_value(serde_json::json!({
            "name": "registry",
            "namespace": "default",
            "username": "tekton",
            "password": "hunter2",
            "serviceAccounts": ["builder", "default"],
            "kind": { "type": "dockerRegistry", "serverUrl": "https://index.docker.io/v1/" }
        }))
        .expect("form");

        assert_eq!(form.kind.tag(), SecretKindTag::DockerRegistry);
        assert_eq!(form.kind.server_url(), Some("https://index.docker.io/v1/"));
        assert_eq!(form.service_accounts.len(), 2);
    }

    #[test]
    fn test_basic_auth_is_default() {
        let form: SecretForm =
            serde_json::from_value(serde_json::json!({ "name": "git" })).expect("form");
        assert_eq!(form.kind, SecretKind::BasicAuth);
        assert_eq!(form.kind.server_url(), None);
        assert_eq!(form.namespace, None);
    }
}
