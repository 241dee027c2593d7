use futures::future::BoxFuture;
use futures::future::FutureExt;
use futures::stream::FuturesUnordered;
use futures::stream::StreamExt;
use tracing::debug;
use tracing::trace;

use tkn_resource_client::ResourceClient;
use tkn_resource_client::SharedClient;
use tkn_types::ResourceObject;
use tkn_types::ResourceWatch;

use crate::list::Applied;
use crate::list::FetchTicket;
use crate::list::ListInputs;
use crate::list::ListLoadState;
use crate::list::ListView;
use crate::list::ResourceListController;

type FetchResult<E> = (FetchTicket, Result<Vec<ResourceObject>, E>);

/// Performs the fetches issued by a [`ResourceListController`].
/// Fetches run concurrently, results are handed to the controller in
/// completion order and superseded ones are dropped there.
pub struct ResourceListDriver<C>
where
    C: ResourceClient + 'static,
{
    client: SharedClient<C>,
    controller: ResourceListController,
    pending: FuturesUnordered<BoxFuture<'static, FetchResult<C::ResourceClientError>>>,
}

impl<C> ResourceListDriver<C>
where
    C: ResourceClient + 'static,
{
    pub fn new(client: SharedClient<C>) -> Self {
        Self {
            client,
            controller: ResourceListController::new(),
            pending: FuturesUnordered::new(),
        }
    }

    pub fn update(&mut self, inputs: &ListInputs) {
        if let Some(ticket) = self.controller.update(inputs) {
            self.fetch(ticket);
        }
    }

    fn fetch(&mut self, ticket: FetchTicket) {
        debug!("fetching {} (seq: {})", ticket.identity(), ticket.seq());
        let client = self.client.clone();
        self.pending.push(
            async move {
                let result = client.retrieve_items(ticket.identity()).await;
                (ticket, result)
            }
            .boxed(),
        );
    }

    /// number of fetches not completed yet
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// wait for next fetch to complete and apply it,
    /// returns none when nothing is in flight
    pub async fn next_settled(&mut self) -> Option<Applied> {
        let (ticket, result) = self.pending.next().await?;
        let applied = self.controller.complete(ticket, result);
        trace!("fetch settled: {:?}, pending: {}", applied, self.pending.len());
        Some(applied)
    }

    /// drain all pending fetches
    pub async fn settle(&mut self) -> &ListLoadState {
        while self.next_settled().await.is_some() {}
        self.controller.state()
    }

    pub fn apply_watch(&mut self, event: ResourceWatch) -> bool {
        self.controller.apply_watch(event)
    }

    pub fn controller(&self) -> &ResourceListController {
        &self.controller
    }

    pub fn state(&self) -> &ListLoadState {
        self.controller.state()
    }

    pub fn view(&self) -> ListView {
        self.controller.view()
    }
}
