#[tokio::main]
async fn main() {
    if let Err(e) = inovix_portal_be::start_server().await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
