mod bot;
mod config;
mod menu;
mod telegram;
mod types;

use anyhow::Result;
use bot::{dispatch_callback, handle_command, log_handler_error, BotState, Command};
use config::{Config, DEFAULT_LOG_FILTER};
use menu::MenuRouter;
use std::sync::Arc;
use telegram::TelegramGateway;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    debug!("Tracing subscriber initialized");

    info!("promo-menu-bot v{}", env!("CARGO_PKG_VERSION"));
    debug!("{}", config);

    let router = MenuRouter::new(&config.admin_username);
    router.validate()?;
    debug!(
        commands = ?router.command_names().collect::<Vec<_>>(),
        "Menu graph validated"
    );

    let bot = Bot::new(&config.bot_token);

    info!("Setting bot commands...");
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to publish bot commands");
    }

    let gateway = Arc::new(TelegramGateway::new(bot.clone()));
    let bot_state = Arc::new(BotState::new(router, gateway));

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(|msg: Message, cmd: Command, state: Arc<BotState>| async move {
                    if let Err(e) = handle_command(msg, cmd, state).await {
                        log_handler_error("command", &e);
                    }
                    respond(())
                }),
        )
        .branch(Update::filter_callback_query().endpoint(
            |q: CallbackQuery, state: Arc<BotState>| async move {
                if let Err(e) = dispatch_callback(q, state).await {
                    log_handler_error("callback", &e);
                }
                respond(())
            },
        ));

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![bot_state])
        .default_handler(|upd: Arc<Update>| async move {
            debug!(update_id = ?upd.id, "Ignoring unhandled update");
        })
        .build();

    info!("Bot started. Press Ctrl+C to stop.");

    tokio::select! {
        _ = dispatcher.dispatch() => {
            info!("Dispatcher stopped");
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    info!("Bot shutting down.");
    Ok(())
}
