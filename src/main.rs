//! Magnetic Mirror entry point
//!
//! Headless runner: plays the game with the demo autopilot at a simulated
//! 60 Hz frame rate and prints the final frame as JSON.
//!
//! Usage: `magnetic-mirror [easy|medium|hard] [seed]`

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use magnetic_mirror::sim::Difficulty;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "magnetic-mirror")]
#[command(about = "Play Magnetic Mirror headless with the demo autopilot")]
struct Cli {
    /// Difficulty for this run: easy, medium or hard (overrides the settings file)
    #[arg(value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
    /// Run seed (overrides the settings file; defaults to the clock)
    seed: Option<u64>,
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(value).ok_or_else(|| format!("unknown difficulty '{value}'"))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use magnetic_mirror::consts::SIM_DT;
    use magnetic_mirror::sim::{InputEvent, autopilot};
    use magnetic_mirror::{FrameRunner, HighScores, Settings};

    let cli = Cli::parse();
    env_logger::init();
    log::info!("Magnetic Mirror (headless) starting...");

    let mut settings = Settings::load_or_default(Path::new(Settings::FILE_NAME));
    if let Some(difficulty) = cli.difficulty {
        settings.difficulty = difficulty;
    }
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }

    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = settings.new_game(clock_seed);
    let mut runner = FrameRunner::new();
    runner.push(InputEvent::StartGame);

    // Feed the scheduler one frame at a time until the life ends
    while runner.ticks() < settings.demo_ticks {
        for event in autopilot::plan(&state) {
            runner.push(event);
        }
        runner.advance(&mut state, SIM_DT);
        if state.is_over() {
            break;
        }
    }

    match state.game_over_reason() {
        Some(reason) => {
            log::info!("Life ended after {} ticks: {}", state.frame, reason);

            let path = Path::new(HighScores::FILE_NAME);
            let mut scores = HighScores::load_or_default(path);
            if let Some(rank) = scores.add_score(state.score, state.difficulty, reason) {
                log::info!("New high score, rank #{}", rank);
                if let Err(err) = scores.save(path) {
                    log::warn!("Could not save high scores: {}", err);
                }
            }
        }
        None => log::info!("Survived all {} ticks", state.frame),
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Could not encode snapshot: {}", err),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build drives `FrameRunner` from requestAnimationFrame instead
}
