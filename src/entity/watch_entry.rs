use serde::{Deserialize, Serialize};

/// A configured pair to watch on schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchEntry {
    pub name: String,
    pub chain: String,
    pub address: String,
}

impl WatchEntry {
    pub fn new(name: &str, chain: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            chain: chain.to_string(),
            address: address.to_string(),
        }
    }
}
