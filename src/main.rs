#[tokio::main]
async fn main() {
    if let Err(e) = dcr_chain_adapter::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
