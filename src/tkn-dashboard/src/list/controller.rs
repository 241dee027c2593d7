use std::fmt::Display;

use tracing::debug;
use tracing::trace;

use tkn_types::ResourceIdentity;
use tkn_types::ResourceObject;
use tkn_types::ResourceWatch;

use crate::NamespaceSelection;

const UNKNOWN_ERROR: &str = "Unknown error";

/// route parameters of the generic resource list page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListRoute {
    pub group: String,
    pub version: String,
    pub kind: String,
    pub namespace: Option<String>,
}

impl ListRoute {
    pub fn new<G, V, K>(group: G, version: V, kind: K) -> Self
    where
        G: Into<String>,
        V: Into<String>,
        K: Into<String>,
    {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
            namespace: None,
        }
    }

    pub fn in_namespace<N: Into<String>>(mut self, namespace: N) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// everything the list depends on, handed over on mount and on every update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListInputs {
    pub route: ListRoute,
    pub selected_namespace: NamespaceSelection,
    pub web_socket_connected: bool,
}

impl ListInputs {
    pub fn new(route: ListRoute) -> Self {
        Self {
            route,
            selected_namespace: NamespaceSelection::All,
            web_socket_connected: true,
        }
    }

    pub fn select(mut self, selection: NamespaceSelection) -> Self {
        self.selected_namespace = selection;
        self
    }

    pub fn connected(mut self, connected: bool) -> Self {
        self.web_socket_connected = connected;
        self
    }

    /// route namespace wins over the selected one, empty names count as unset
    pub fn identity(&self) -> ResourceIdentity {
        let identity = ResourceIdentity::new(
            self.route.group.as_str(),
            self.route.version.as_str(),
            self.route.kind.as_str(),
        );
        let namespace = self
            .route
            .namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .or_else(|| self.selected_namespace.as_option().filter(|ns| !ns.is_empty()));
        match namespace {
            Some(ns) => identity.in_namespace(ns),
            None => identity,
        }
    }
}

/// Fetch issued by the controller. Only the latest ticket of the current
/// target gets its result applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    identity: ResourceIdentity,
    seq: u64,
}

impl FetchTicket {
    pub fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: String,
    pub message: String,
}

impl FetchFailure {
    pub fn new<E: Display>(kind: &str, error: &E) -> Self {
        let message = error.to_string();
        Self {
            kind: kind.to_owned(),
            message: if message.is_empty() {
                UNKNOWN_ERROR.to_owned()
            } else {
                message
            },
        }
    }

    pub fn title(&self) -> String {
        format!("Error loading {}", self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListLoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<ResourceObject>),
    Failed(FetchFailure),
}

impl ListLoadState {
    pub fn items(&self) -> Option<&[ResourceObject]> {
        match self {
            Self::Loaded(items) => Some(items),
            _ => None,
        }
    }
}

/// outcome of handing a fetch result to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    Stale,
}

/// Decides when the resource list refetches and keeps what was fetched.
///
/// Fetches are issued on mount, when the effective identity changes and when
/// the watch socket reconnects. The controller does no io, callers perform the
/// fetch named by the returned ticket and report back through [`complete`].
///
/// [`complete`]: ResourceListController::complete
#[derive(Debug, Default)]
pub struct ResourceListController {
    target: Option<ResourceIdentity>,
    connected: Option<bool>,
    issued: u64,
    // first ticket issued for current target
    target_since: u64,
    applied: u64,
    state: ListLoadState,
}

impl ResourceListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, inputs: &ListInputs) -> FetchTicket {
        let identity = inputs.identity();
        debug!("mounting list of {}", identity);
        self.connected = Some(inputs.web_socket_connected);
        self.issue(identity)
    }

    /// new inputs from the page, returns fetch to perform if any
    pub fn update(&mut self, inputs: &ListInputs) -> Option<FetchTicket> {
        if self.target.is_none() {
            return Some(self.mount(inputs));
        }

        let reconnected = self.connected == Some(false) && inputs.web_socket_connected;
        self.connected = Some(inputs.web_socket_connected);

        let identity = inputs.identity();
        if self.target.as_ref() != Some(&identity) {
            debug!("list target changed to {}", identity);
            Some(self.issue(identity))
        } else if reconnected {
            debug!("socket reconnected, refreshing {}", identity);
            Some(self.issue(identity))
        } else {
            trace!("no refetch for {}", identity);
            None
        }
    }

    fn issue(&mut self, identity: ResourceIdentity) -> FetchTicket {
        self.issued += 1;
        if self.target.as_ref() != Some(&identity) {
            self.target_since = self.issued;
        }
        self.target = Some(identity.clone());
        self.state = ListLoadState::Loading;
        FetchTicket {
            identity,
            seq: self.issued,
        }
    }

    /// apply result of fetch, results of superseded tickets are dropped
    pub fn complete<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ResourceObject>, E>,
    ) -> Applied {
        if self.target.as_ref() != Some(&ticket.identity)
            || ticket.seq < self.target_since
            || ticket.seq < self.applied
        {
            debug!(
                "dropping stale result of {} (seq: {})",
                ticket.identity, ticket.seq
            );
            return Applied::Stale;
        }

        self.applied = ticket.seq;
        self.state = match result {
            Ok(items) => {
                debug!("{}: loaded {} items", ticket.identity, items.len());
                ListLoadState::Loaded(items)
            }
            Err(err) => {
                debug!("{}: fetch failed: {}", ticket.identity, err);
                ListLoadState::Failed(FetchFailure::new(&ticket.identity.kind, &err))
            }
        };
        Applied::Current
    }

    /// patch loaded list with watch event, returns true if list changed
    pub fn apply_watch(&mut self, event: ResourceWatch) -> bool {
        let Some(target) = &self.target else {
            return false;
        };
        let object = event.object();
        if let Some(ns) = &target.namespace {
            if &object.metadata.namespace != ns {
                trace!("ignoring event from namespace {}", object.metadata.namespace);
                return false;
            }
        }
        if !object.api_version.is_empty() && object.api_version != target.api_version() {
            trace!("ignoring {} event for {}", object.api_version, target);
            return false;
        }
        let ListLoadState::Loaded(items) = &mut self.state else {
            return false;
        };
        // the plural in the identity does not name the kind, compare with what was loaded
        if !object.kind.is_empty()
            && items
                .iter()
                .any(|item| !item.kind.is_empty() && item.kind != object.kind)
        {
            trace!("ignoring {} event for {}", object.kind, target);
            return false;
        }

        match event {
            ResourceWatch::ADDED(object) | ResourceWatch::MODIFIED(object) => {
                match items.iter_mut().find(|item| item.uid() == object.uid()) {
                    Some(item) => *item = object,
                    None => items.push(object),
                }
                true
            }
            ResourceWatch::DELETED(object) => {
                let before = items.len();
                items.retain(|item| item.uid() != object.uid());
                items.len() != before
            }
        }
    }

    pub fn state(&self) -> &ListLoadState {
        &self.state
    }

    pub fn target(&self) -> Option<&ResourceIdentity> {
        self.target.as_ref()
    }

    pub fn namespace_scoped(&self) -> bool {
        self.target
            .as_ref()
            .map(ResourceIdentity::is_namespaced)
            .unwrap_or(false)
    }
}
