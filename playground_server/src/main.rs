#[tokio::main]
async fn main() {
    if let Err(e) = playground_server::run_with_config().await {
        tracing::error!(error = %e, "playground server stopped");
        std::process::exit(1);
    }
}
