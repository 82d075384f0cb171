use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{self, Theme, FRAME_POLL_MS, GRID_SIZE, TICK_INTERVAL_MS};
use grid_snake::game::{GameState, Phase};
use grid_snake::input::{self, GameInput};
use grid_snake::renderer::{self, Overlay};
use grid_snake::score::{load_high_score, save_high_score};
use grid_snake::terminal_runtime::{restore_terminal, TerminalSession};
use grid_snake::timestep::TickAccumulator;
use grid_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(name = "grid-snake", about = "Classic 20x20 snake in the terminal")]
struct Cli {
    /// Seed the food-placement RNG for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme: classic, ocean, or neon.
    #[arg(long, default_value = "classic")]
    theme: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(theme) = config::find_theme(&cli.theme) else {
        let names: Vec<&str> = config::THEMES.iter().map(|theme| theme.name).collect();
        eprintln!(
            "unknown theme {:?}; available: {}",
            cli.theme,
            names.join(", ")
        );
        return ExitCode::from(2);
    };

    // Surface a score-file warning now, while stderr is still visible.
    let high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("warning: ignoring unreadable high-score file: {error}");
            0
        }
    };

    install_panic_hook();

    match run(&cli, theme, high_score) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, theme: &Theme, mut high_score: u32) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(GRID_SIZE, seed),
        None => GameState::new(GRID_SIZE),
    };
    let mut accumulator = TickAccumulator::new(Duration::from_millis(TICK_INTERVAL_MS));

    // Boot into the start screen; ticking resumes only while unpaused.
    let mut paused = true;
    let mut last_frame = Instant::now();
    let mut last_phase = state.phase;

    loop {
        let overlay = if is_start_screen(&state, paused) {
            Overlay::Start
        } else if paused {
            Overlay::Paused
        } else {
            Overlay::None
        };
        let info = HudInfo {
            high_score,
            seed: cli.seed,
        };

        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, theme, &info, overlay))?;

        match input::poll_input(Duration::from_millis(FRAME_POLL_MS))? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Confirm) => {
                if matches!(state.phase, Phase::Victory | Phase::Defeat) {
                    state.reset();
                    paused = true;
                } else if paused {
                    paused = false;
                    accumulator.rewind();
                }
            }
            Some(GameInput::Pause) => {
                if state.phase == Phase::Playing && !is_start_screen(&state, paused) {
                    paused = !paused;
                    if !paused {
                        accumulator.rewind();
                    }
                }
            }
            Some(GameInput::Direction(direction)) => {
                if !paused {
                    state.queue_direction(direction);
                }
            }
            None => {}
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;

        if !paused && state.phase == Phase::Playing {
            for _ in 0..accumulator.advance(elapsed) {
                state.tick();
            }
        }

        if state.phase != last_phase {
            if matches!(state.phase, Phase::Victory | Phase::Defeat) && state.score > high_score {
                high_score = state.score;
                if let Err(error) = save_high_score(high_score) {
                    eprintln!("failed to save high score: {error}");
                }
            }
            last_phase = state.phase;
        }
    }

    Ok(())
}

fn is_start_screen(state: &GameState, paused: bool) -> bool {
    paused && state.tick_count == 0 && state.score == 0
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}
