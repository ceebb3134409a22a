pub mod alert_interactor;
pub mod history_store;
pub mod query_interactor;
pub mod resolver_interactor;
