mod alert;
mod bot_error;
mod history;
mod pair;
mod query;
mod run_mode;
mod watch_entry;

pub use alert::AlertEvaluation;
pub use bot_error::BotError;
pub use history::{HistoryRecord, HistorySnapshot};
pub use pair::PairRecord;
pub use query::QueryRequest;
pub use run_mode::RunMode;
pub use watch_entry::WatchEntry;
