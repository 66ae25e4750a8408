mod config;
mod engine;
mod model;
mod ui;

use std::thread;
use std::time::Duration;

use colored::Colorize;
use log::{debug, info};

use crate::engine::controller::TurnController;
use crate::engine::llm_client::OllamaClient;
use crate::engine::protocol::Renderer;
use crate::ui::terminal::TerminalRenderer;

const OPENING_SCENE: &str = "The ancient stone door creaks open before you. \
Torchlight flickers against damp walls as you step into the forgotten dungeon. \
The air is thick with mystery and danger...";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_config();
    debug!("backend: {} ({})", config.endpoint, config.model);

    let engine = OllamaClient::new(config);
    let mut renderer = TerminalRenderer::new()?;

    renderer.clear();
    renderer.typewriter(
        &"Initializing game world...".yellow().to_string(),
        Duration::from_millis(50),
    );
    thread::sleep(Duration::from_secs(1));

    // A dead backend is a soft start: each turn fails with a visible notice
    // until the player brings it up.
    match engine.probe() {
        Ok(status) => {
            info!("{status}");
            renderer.typewriter(
                &"Connection established.".green().to_string(),
                Duration::from_millis(30),
            );
        }
        Err(e) => {
            debug!("backend probe failed: {e}");
            renderer.typewriter(
                &"No narration backend answered. The dungeon waits for one..."
                    .red()
                    .to_string(),
                Duration::from_millis(30),
            );
        }
    }
    thread::sleep(Duration::from_millis(500));

    renderer.show_narration(OPENING_SCENE);

    TurnController::new(renderer, engine).run()
}
