use clap::Parser;
use idf_rail_dashboard::cli::{run, Cli};
use idf_rail_dashboard::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
