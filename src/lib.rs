pub mod cli;
pub mod commands;
pub mod dexscreener;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod services;
pub mod settings;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use cli::Cli;
pub use di::ServiceContainer;
pub use entity::*;
pub use router::{Router, TelegramRouter};
pub use services::{CycleReport, MonitorService};
pub use settings::AppSettings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
