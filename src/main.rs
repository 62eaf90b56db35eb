use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = wayfinder::cli::Cli::parse();
    if let Err(e) = wayfinder::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
