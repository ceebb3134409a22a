use async_trait::async_trait;
use std::sync::Arc;

use crate::entity::{PairRecord, QueryRequest};
use crate::interactor::resolver_interactor::PairResolver;

/// Shortest string we accept as an on-chain address
pub const MIN_ADDRESS_LENGTH: usize = 30;

#[async_trait]
pub trait QueryInteractor: Send + Sync {
    fn parse_query(&self, text: &str) -> Option<QueryRequest>;
    async fn lookup(&self, request: &QueryRequest) -> Option<PairRecord>;
}

pub struct QueryInteractorImpl {
    resolver: Arc<dyn PairResolver + Send + Sync>,
}

impl QueryInteractorImpl {
    pub fn new(resolver: Arc<dyn PairResolver + Send + Sync>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl QueryInteractor for QueryInteractorImpl {
    fn parse_query(&self, text: &str) -> Option<QueryRequest> {
        parse_query(text)
    }

    async fn lookup(&self, request: &QueryRequest) -> Option<PairRecord> {
        self.resolver
            .resolve(&request.address, request.chain_hint.as_deref())
            .await
    }
}

/// Parses `<address>` or `<chain> <address>`, anything else is not a query
pub fn parse_query(text: &str) -> Option<QueryRequest> {
    let parts: Vec<&str> = text.split_whitespace().collect();

    let (chain_hint, address) = match parts.as_slice() {
        [address] => (None, *address),
        [chain, address] => (Some(chain.to_lowercase()), *address),
        _ => return None,
    };

    if address.chars().count() < MIN_ADDRESS_LENGTH {
        return None;
    }

    Some(QueryRequest {
        chain_hint,
        address: address.to_string(),
    })
}
