use anyhow::Context;
use paymux_cli::{build_gateway, run_demo, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "paymux_cli=debug,paymux_gateway=info,paymux_providers=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting paymux payment gateway demo");

    let gateway = build_gateway(&config);
    tracing::info!("Registered providers: {:?}", gateway.provider_names());

    let summary = run_demo(&gateway).await.context("Demo run failed")?;
    tracing::info!("Demo run complete: {}", summary);

    Ok(())
}
