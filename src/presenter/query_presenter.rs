use crate::interactor::query_interactor::QueryInteractor;
use crate::utils::shorten_address;
use crate::view::query_view::QueryView;
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

#[async_trait]
pub trait QueryPresenter: Send + Sync {
    /// Answers one inbound message, ignoring text that is not an address query
    async fn handle_text(&self, text: &str) -> Result<()>;
}

pub struct QueryPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> QueryPresenterImpl<I, V>
where
    I: QueryInteractor,
    V: QueryView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> QueryPresenter for QueryPresenterImpl<I, V>
where
    I: QueryInteractor + Send + Sync,
    V: QueryView + Send + Sync,
{
    async fn handle_text(&self, text: &str) -> Result<()> {
        let request = match self.interactor.parse_query(text) {
            Some(request) => request,
            None => {
                debug!("Ignoring message that is not an address query");
                return Ok(());
            }
        };

        info!(
            "Query for {} (chain: {})",
            shorten_address(&request.address),
            request.chain_hint.as_deref().unwrap_or("any")
        );

        let loading = self
            .view
            .display_loading(request.chain_hint.as_deref())
            .await?;

        match self.interactor.lookup(&request).await {
            Some(pair) => self.view.display_pair(&pair, loading).await?,
            None => {
                self.view
                    .display_not_found(&request.address, loading)
                    .await?
            }
        }

        Ok(())
    }
}
