//! Space Spider entry point
//!
//! Loads settings and assets, opens the window and runs the game loop.

use std::process::ExitCode;
use std::time::Duration;

use space_spider::assets::Assets;
use space_spider::consts::WINDOW_TITLE;
use space_spider::platform::{SleepClock, WindowPlatform};
use space_spider::{Game, GameError, RunSummary, Settings};

fn run(settings: Settings) -> Result<RunSummary, GameError> {
    let assets = Assets::load(&settings)?;
    let mut platform =
        WindowPlatform::open(WINDOW_TITLE, settings.screen_width, settings.screen_height)?;

    let grace = Duration::from_millis(settings.exit_grace_ms);
    let mut game = Game::new(settings, &assets);
    let summary = game.run(&mut platform, &mut SleepClock::new())?;

    std::thread::sleep(grace);
    Ok(summary)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Space Spider starting...");

    match run(Settings::load()) {
        Ok(summary) => {
            log::info!("Final score: {} hits", summary.hits);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("space-spider: {e}");
            ExitCode::FAILURE
        }
    }
}
