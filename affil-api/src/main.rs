use std::net::SocketAddr;
use std::sync::Arc;

use affil_api::{app, AppState};
use affil_catalog::StaticCatalog;
use affil_connect::app_config::{AdapterMode, Config};
use affil_connect::{
    ClickBankClient, LogNotifier, MockCatalogSource, OpenAiGenerator, SimulatedScriptGenerator,
    TelegramNotifier,
};
use affil_core::adapter::{CatalogSource, Notifier, ScriptGenerator};
use affil_core::CoreError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "affil_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting affiliate API on port {}", config.server.port);

    let state = build_state(&config)?;
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Wires the adapter set selected by `adapters.mode` into the app state.
/// Live mode requires the corresponding credentials up front so a
/// misconfigured deployment fails at startup, not on first request.
fn build_state(config: &Config) -> Result<AppState, CoreError> {
    let amazon_catalog = Arc::new(StaticCatalog::amazon());

    let (clickbank, generator, notifier): (
        Arc<dyn CatalogSource>,
        Arc<dyn ScriptGenerator>,
        Arc<dyn Notifier>,
    ) = match config.adapters.mode {
        AdapterMode::Mock => {
            tracing::info!("Adapters running in mock mode");
            (
                Arc::new(MockCatalogSource::new(StaticCatalog::clickbank())),
                Arc::new(SimulatedScriptGenerator),
                Arc::new(LogNotifier),
            )
        }
        AdapterMode::Live => {
            tracing::info!("Adapters running in live mode");
            let clickbank_key = require(config.clickbank.api_key.as_deref(), "clickbank.api_key")?;
            let openai_key = require(config.openai.api_key.as_deref(), "openai.api_key")?;
            let bot_token = require(config.telegram.bot_token.as_deref(), "telegram.bot_token")?;
            let chat_id = require(config.telegram.chat_id.as_deref(), "telegram.chat_id")?;

            (
                Arc::new(ClickBankClient::new(&config.clickbank.api_url, clickbank_key)?),
                Arc::new(OpenAiGenerator::new(
                    &config.openai.api_url,
                    openai_key,
                    &config.openai.model,
                )?),
                Arc::new(TelegramNotifier::new(
                    &config.telegram.api_url,
                    bot_token,
                    chat_id,
                )?),
            )
        }
    };

    Ok(AppState {
        amazon_catalog,
        clickbank,
        generator,
        notifier,
    })
}

fn require<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str, CoreError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoreError::Configuration(format!("{key} is required in live mode")))
}
