//! # Giveaway Bot Main Entry Point
//!
//! Initializes logging, loads configuration and the state file, starts the
//! draw service and health server, and runs the Telegram bot.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use giveaway_bot::bot::handlers::BotHandler;
use giveaway_bot::bot::tracker::MessageTracker;
use giveaway_bot::config::Config;
use giveaway_bot::giveaway::{GiveawayController, GiveawayStore};
use giveaway_bot::services::draw::DrawService;
use giveaway_bot::services::health::HealthService;
use giveaway_bot::utils::datetime::format_timestamp;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "giveaway_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Giveaway Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - chat: {}, range: {}, draws {}, state file: {}, HTTP port: {}",
        config.giveaway.chat_id,
        config.giveaway.range,
        config.giveaway.schedule,
        config.state_file.display(),
        config.http_port
    );

    // Load giveaway state
    let store = GiveawayStore::load(&config.state_file).await.map_err(|e| {
        tracing::error!("Failed to load giveaway state: {}", e);
        anyhow::anyhow!("Failed to load giveaway state: {}", e)
    })?;
    info!(
        "Giveaway state loaded - {} entries, round ends {}, {} archived rounds",
        store.state().current_giveaway.entry_count(),
        format_timestamp(store.state().current_giveaway.end_time),
        store.state().archive.len()
    );

    let controller = GiveawayController::new(
        store,
        config.giveaway.range,
        config.giveaway.schedule,
    );
    let tracker = MessageTracker::new();

    // Initialize bot
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(controller.clone(), config.giveaway.clone(), tracker.clone());

    // Initialize and start draw service
    let mut draw_service = match DrawService::new(
        bot.clone(),
        controller.clone(),
        config.giveaway.clone(),
        tracker,
        config.poll_interval,
    )
    .await
    {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Failed to create draw service: {}", e);
            return Err(anyhow::anyhow!("Failed to create draw service: {}", e));
        }
    };

    if let Err(e) = draw_service.start().await {
        tracing::error!("Failed to start draw service: {}", e);
        return Err(anyhow::anyhow!("Failed to start draw service: {}", e));
    }

    // Catch up on a round that ended while the bot was down
    if let Err(e) = draw_service.check_draw_now().await {
        tracing::error!("Startup draw check failed: {}", e);
    }

    // Initialize health service
    let health_service = HealthService::new(controller);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    // Stop draw service on shutdown
    if let Err(e) = draw_service.stop().await {
        tracing::warn!("Error stopping draw service: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
