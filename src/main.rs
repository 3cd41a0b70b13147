use log::info;
use std::env;

use snake_arena::config::Config;
use snake_arena::game::Game;
use snake_arena::sinks::{LogStatus, TerminalRender};
use snake_arena::tick_log::TickLogger;

#[tokio::main]
async fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment
    // variable is set, we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    info!("Starting snake arena...");

    // Load configuration once at startup
    let config = Config::load_or_default();

    let tick_logger =
        TickLogger::new(config.tick_log.enabled, &config.tick_log.log_file_path).await;

    let mut game = Game::new(&config);
    game.set_tick_logger(tick_logger);

    let mut render = TerminalRender;
    let mut status = LogStatus;
    game.run(&mut render, &mut status).await;
}
