use clap::Parser;
use zen_dl::cli::Cli;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = zen_dl::cli::run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
