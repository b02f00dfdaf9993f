use std::path::PathBuf;
use std::sync::Arc;

use rolecall::config::Resources;
use rolecall::handlers::Handler;
use rolecall::BotContext;

use serenity::all::{Client, GatewayIntents};

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {:?}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    let _ = tokio::signal::ctrl_c().await;
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting up");

    let data_dir = std::env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));

    let resources = match Resources::load(&data_dir) {
        Ok(resources) => resources,
        Err(e) => {
            tracing::error!("Error reading data files: {}", e);
            std::process::exit(1);
        }
    };

    let token = resources.config.token.clone();
    let bot = Arc::new(BotContext::new(resources));

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    tracing::info!("Connecting bot");

    let mut client = match Client::builder(token, intents)
        .event_handler(Handler { bot })
        .await
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Error creating client: {:?}", e);
            std::process::exit(1);
        }
    };

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Closing down");
        shard_manager.shutdown_all().await;
    });

    if let Err(why) = client.start().await {
        tracing::error!("Client error: {:?}", why);
        std::process::exit(1);
    }
}
