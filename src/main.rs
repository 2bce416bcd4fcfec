use animal_registry::config::ServiceConfig;
use animal_registry::lifecycle::controller::{LifecycleController, shutdown_signal};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .init();

    let mut controller = LifecycleController::new(config);

    // 1. Storage directory + restore:
    let store = controller.start().await?;

    // 2. Listener:
    let listener = controller.bind().await?;

    // 3. Serve until SIGINT/SIGTERM, then drain:
    controller.run(listener, store, shutdown_signal()).await?;

    Ok(())
}
