use std::collections::HashMap;
use std::fmt;
use std::io::Error as IoError;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::channel::oneshot;
use fluvio_future::test_async;

use tkn_dashboard::list::Applied;
use tkn_dashboard::list::EmptyState;
use tkn_dashboard::list::ListInputs;
use tkn_dashboard::list::ListLoadState;
use tkn_dashboard::list::ListRoute;
use tkn_dashboard::list::ListView;
use tkn_dashboard::list::ResourceListDriver;
use tkn_dashboard::NamespaceSelection;
use tkn_resource_client::DoNothingClient;
use tkn_resource_client::InMemoryClient;
use tkn_resource_client::InMemoryError;
use tkn_resource_client::ResourceClient;
use tkn_resource_client::ResourceClientError;
use tkn_types::ObjectMeta;
use tkn_types::ResourceIdentity;
use tkn_types::ResourceObject;
use tkn_types::ResourceWatch;

#[derive(Debug)]
enum GateError {
    Closed,
    Io(IoError),
    Json(serde_json::Error),
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "gate closed"),
            Self::Io(err) => write!(f, "io: {}", err),
            Self::Json(err) => write!(f, "{}", err),
        }
    }
}

impl From<IoError> for GateError {
    fn from(error: IoError) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for GateError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl ResourceClientError for GateError {
    fn not_founded(&self) -> bool {
        false
    }
}

type Gate = oneshot::Receiver<Vec<ResourceObject>>;

/// list requests wait until the test releases the items of their namespace
#[derive(Default)]
struct GatedClient {
    gates: Mutex<HashMap<Option<String>, Gate>>,
}

impl GatedClient {
    fn gate(&self, namespace: Option<&str>) -> oneshot::Sender<Vec<ResourceObject>> {
        let (sender, receiver) = oneshot::channel();
        self.gates
            .lock()
            .expect("lock")
            .insert(namespace.map(str::to_owned), receiver);
        sender
    }
}

#[async_trait]
impl ResourceClient for GatedClient {
    type ResourceClientError = GateError;

    async fn retrieve_items(
        &self,
        identity: &ResourceIdentity,
    ) -> Result<Vec<ResourceObject>, Self::ResourceClientError> {
        let gate = {
            let mut gates = self.gates.lock().expect("lock");
            gates.remove(&identity.namespace)
        };
        match gate {
            Some(gate) => gate.await.map_err(|_| GateError::Closed),
            None => Err(GateError::Closed),
        }
    }

    async fn retrieve_object(
        &self,
        _identity: &ResourceIdentity,
        _name: &str,
    ) -> Result<ResourceObject, Self::ResourceClientError> {
        Err(GateError::Closed)
    }

    async fn create_object(
        &self,
        _identity: &ResourceIdentity,
        _value: ResourceObject,
    ) -> Result<ResourceObject, Self::ResourceClientError> {
        Err(GateError::Closed)
    }

    async fn replace_object(
        &self,
        _identity: &ResourceIdentity,
        _value: ResourceObject,
    ) -> Result<ResourceObject, Self::ResourceClientError> {
        Err(GateError::Closed)
    }
}

fn tasks() -> ListInputs {
    ListInputs::new(ListRoute::new("tekton.dev", "v1alpha1", "tasks"))
}

fn task(name: &str, namespace: &str) -> ResourceObject {
    let mut metadata = ObjectMeta::new(name, namespace);
    metadata.uid = format!("{}-{}", namespace, name);
    ResourceObject::new(metadata)
}

fn names(state: &ListLoadState) -> Vec<String> {
    state
        .items()
        .map(|items| items.iter().map(|item| item.name().to_owned()).collect())
        .unwrap_or_default()
}

#[test_async]
async fn test_late_result_of_previous_namespace_is_dropped() -> Result<(), GateError> {
    let client = Arc::new(GatedClient::default());
    let blue = client.gate(Some("blue"));
    let green = client.gate(Some("green"));

    let mut driver = ResourceListDriver::new(client.clone());
    driver.update(&tasks().select(NamespaceSelection::named("blue")));
    driver.update(&tasks().select(NamespaceSelection::named("green")));
    assert_eq!(driver.pending(), 2);

    green
        .send(vec![task("build", "green")])
        .map_err(|_| GateError::Closed)?;
    assert_eq!(driver.next_settled().await, Some(Applied::Current));
    assert_eq!(names(driver.state()), vec!["build"]);

    blue.send(vec![task("lint", "blue")])
        .map_err(|_| GateError::Closed)?;
    assert_eq!(driver.next_settled().await, Some(Applied::Stale));
    assert_eq!(names(driver.state()), vec!["build"]);
    assert_eq!(driver.next_settled().await, None);

    Ok(())
}

#[test_async]
async fn test_driver_loads_from_store() -> Result<(), InMemoryError> {
    let client = Arc::new(InMemoryClient::new());
    let identity = tasks().identity();
    client.insert(&identity, task("build", "default"))?;
    client.insert(&identity, task("deploy", "green"))?;

    let mut driver = ResourceListDriver::new(client.clone());
    driver.update(&tasks());
    driver.settle().await;
    assert_eq!(names(driver.state()), vec!["build", "deploy"]);

    // unchanged inputs do not refetch
    driver.update(&tasks());
    assert_eq!(driver.pending(), 0);

    driver.update(&tasks().select(NamespaceSelection::named("blue")));
    driver.settle().await;
    assert_eq!(
        driver.view(),
        ListView::Empty(EmptyState::Namespace {
            kind: "tasks".to_owned(),
            namespace: "blue".to_owned()
        })
    );

    Ok(())
}

#[test_async]
async fn test_reconnect_picks_up_missed_changes() -> Result<(), InMemoryError> {
    let client = Arc::new(InMemoryClient::new());
    let identity = tasks().identity();
    client.insert(&identity, task("build", "default"))?;

    let mut driver = ResourceListDriver::new(client.clone());
    driver.update(&tasks());
    driver.settle().await;

    driver.update(&tasks().connected(false));
    client.insert(&identity, task("deploy", "default"))?;
    assert_eq!(driver.pending(), 0);

    driver.update(&tasks().connected(true));
    assert_eq!(driver.pending(), 1);
    driver.settle().await;
    assert_eq!(names(driver.state()), vec!["build", "deploy"]);

    Ok(())
}

#[test_async]
async fn test_watch_events_patch_driver_list() -> Result<(), InMemoryError> {
    let client = Arc::new(InMemoryClient::new());
    let inputs = tasks().select(NamespaceSelection::named("default"));
    let build = client.insert(&inputs.identity(), task("build", "default"))?;

    let mut driver = ResourceListDriver::new(client);
    driver.update(&inputs);
    driver.settle().await;

    assert!(driver.apply_watch(ResourceWatch::ADDED(task("deploy", "default"))));
    assert!(!driver.apply_watch(ResourceWatch::ADDED(task("other", "blue"))));
    assert!(driver.apply_watch(ResourceWatch::DELETED(build)));
    assert_eq!(names(driver.state()), vec!["deploy"]);
    assert_eq!(driver.pending(), 0);

    Ok(())
}

#[test_async]
async fn test_failed_fetch_shows_error() -> Result<(), InMemoryError> {
    let mut driver = ResourceListDriver::new(Arc::new(DoNothingClient()));
    driver.update(&tasks());
    driver.settle().await;

    assert_eq!(
        driver.view(),
        ListView::Error {
            title: "Error loading tasks".to_owned(),
            message: "not found".to_owned()
        }
    );
    assert!(driver.controller().target().is_some());

    Ok(())
}
