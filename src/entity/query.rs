/// A parsed interactive lookup: an address with an optional chain hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub chain_hint: Option<String>,
    pub address: String,
}
