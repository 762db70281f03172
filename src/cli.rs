use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "openeatdb", version, about)]
pub struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL to the database (overrides the configuration file)
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,
}
