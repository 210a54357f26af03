use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pizza-factory")]
#[command(about = "A small demo CLI for pizza factory functions")]
pub struct CliConfig {
    #[arg(long, requires = "size", help = "Variety label for a custom pizza")]
    pub category: Option<String>,

    #[arg(long, requires = "category", help = "Size in inches (any text is accepted)")]
    pub size: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
