#[tokio::main]
async fn main() {
    if let Err(e) = signer_inspector::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
