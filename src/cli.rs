use clap::Parser;

use crate::entity::RunMode;

/// DEX pair monitor and price alert bot
#[derive(Parser, Debug)]
#[command(name = "dex-pair-monitor", version, about)]
pub struct Cli {
    /// Run a single monitor cycle and exit
    #[arg(long)]
    pub cron: bool,

    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Cli {
    pub fn mode(&self) -> RunMode {
        if self.cron {
            RunMode::Cron
        } else {
            RunMode::Interactive
        }
    }
}
