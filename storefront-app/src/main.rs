use anyhow::Context;
use storefront_config::Config;
use storefront_core::Console;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Diagnostics on stderr; stdout carries only the order's side effects.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        products = config.catalog.len(),
        lines = config.order.len(),
        "Starting storefront"
    );

    let total = storefront_app::run(&config, &Console::stdout()).context("Checkout failed")?;
    tracing::info!(total, "Done");

    Ok(())
}
