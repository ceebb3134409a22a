pub mod query_presenter;
