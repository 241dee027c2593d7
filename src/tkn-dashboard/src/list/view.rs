use std::fmt;

use tkn_types::ResourceIdentity;
use tkn_types::ResourceObject;

use crate::list::ListLoadState;
use crate::list::ResourceListController;
use crate::urls;
use crate::NamespaceSelection;

/// text shown when a list has no items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    AllNamespaces { kind: String },
    Namespace { kind: String, namespace: String },
}

impl EmptyState {
    pub fn new(kind: &str, namespace: Option<&str>) -> Self {
        match namespace {
            Some(namespace) => Self::Namespace {
                kind: kind.to_owned(),
                namespace: namespace.to_owned(),
            },
            None => Self::AllNamespaces {
                kind: kind.to_owned(),
            },
        }
    }

    pub fn for_selection(kind: &str, selection: &NamespaceSelection) -> Self {
        Self::new(kind, selection.as_option())
    }

    fn for_identity(identity: &ResourceIdentity) -> Self {
        Self::new(&identity.kind, identity.namespace.as_deref())
    }
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AllNamespaces { kind } => write!(f, "No {} under any namespace.", kind),
            Self::Namespace { kind, namespace } => {
                write!(f, "No {} under namespace {}", kind, namespace)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRow {
    pub uid: String,
    pub name: String,
    pub namespace: String,
    pub created: String,
    pub link: String,
}

impl ResourceRow {
    fn new(identity: &ResourceIdentity, item: &ResourceObject) -> Self {
        let metadata = &item.metadata;
        let link = if metadata.is_namespaced() {
            urls::resource_by_name(
                &metadata.namespace,
                &identity.group,
                &identity.version,
                &identity.kind,
                &metadata.name,
            )
        } else {
            urls::cluster_resource_by_name(
                &identity.group,
                &identity.version,
                &identity.kind,
                &metadata.name,
            )
        };
        Self {
            uid: metadata.uid.clone(),
            name: metadata.name.clone(),
            namespace: metadata.namespace.clone(),
            created: metadata.creation_timestamp.clone(),
            link,
        }
    }
}

/// what the list page renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Error { title: String, message: String },
    Empty(EmptyState),
    Rows(Vec<ResourceRow>),
}

impl ResourceListController {
    pub fn view(&self) -> ListView {
        let Some(target) = self.target() else {
            return ListView::Loading;
        };
        match self.state() {
            ListLoadState::Idle | ListLoadState::Loading => ListView::Loading,
            ListLoadState::Failed(failure) => ListView::Error {
                title: failure.title(),
                message: failure.message.clone(),
            },
            ListLoadState::Loaded(items) if items.is_empty() => {
                ListView::Empty(EmptyState::for_identity(target))
            }
            ListLoadState::Loaded(items) => ListView::Rows(
                items
                    .iter()
                    .map(|item| ResourceRow::new(target, item))
                    .collect(),
            ),
        }
    }
}
