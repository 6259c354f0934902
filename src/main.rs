use aracanix_bot::adapter::inbound::cli::{self, command::Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = cli::execute(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
