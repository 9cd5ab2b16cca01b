//! Memo Robots entry point
//!
//! Native builds have no window: the game is dealt from the settings file and
//! played to the end by the autoplayer, which makes a handy smoke test of the
//! whole loop.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use memo_robots::consts::SIM_DT;
use memo_robots::sim::{AutoPlayer, GameEvent};
use memo_robots::{App, Settings};

/// Give up on a demo game after this many frames
const MAX_FRAMES: u32 = 1_000_000;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Memo Robots (native) starting...");

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("memo_robots.json"));
    let settings = Settings::load(&path);
    let seed = settings.seed.unwrap_or_else(clock_seed);

    let mut app = match App::new(settings, seed) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Cannot start game: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = app.show_game() {
        log::error!("Cannot deal: {}", e);
        return ExitCode::FAILURE;
    }

    let mut bot = AutoPlayer::new();
    for _ in 0..MAX_FRAMES {
        if let Some(id) = bot.next_touch(&app.game().board)
            && let Some(rect) = app.game().rect(id)
        {
            app.tap(rect.center());
        }
        for event in app.update(SIM_DT) {
            match event {
                GameEvent::PairMatched(a, b) => log::info!("Pair found: {} {}", a, b),
                GameEvent::Won => log::info!("All pairs found!"),
                _ => {}
            }
        }
        if app.is_won_popup_open() {
            let game = app.game();
            println!(
                "Won with seed {} in {} turns ({:.1}s of play)",
                game.seed,
                game.board.turns(),
                game.elapsed.as_secs_f32()
            );
            app.close();
            return ExitCode::SUCCESS;
        }
    }

    log::warn!("Demo game did not finish");
    ExitCode::FAILURE
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
