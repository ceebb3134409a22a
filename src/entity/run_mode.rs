/// How the process was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Run one monitor cycle and exit
    Cron,
    /// Long-polling Telegram bot answering address queries
    Interactive,
}
