use std::io;
use std::thread;
use std::time::Instant;

use clap::Parser;

use snake_arcade::config::{
    theme_by_name, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, FRAME_INTERVAL, THEMES,
};
use snake_arcade::game::{GameRound, TickOutcome};
use snake_arcade::grid::GridSize;
use snake_arcade::input::{GameInput, InputHandler};
use snake_arcade::renderer;
use snake_arcade::settings::{load_settings, save_settings, Settings};
use snake_arcade::terminal_runtime::{install_panic_hook, TerminalSession};
use snake_arcade::ui::hud::HudInfo;
use snake_arcade::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

#[derive(Debug, Parser)]
#[command(version, about = "Level-based terminal Snake arcade game")]
struct Cli {
    /// Color theme to start with (garden, classic, neon).
    #[arg(long)]
    theme: Option<String>,

    /// Seed for the simulation RNG, for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

/// Which screen owns input right now. The simulation only ticks in
/// `Playing`; pausing is simply not ticking it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Scene {
    Start,
    Playing,
    Paused,
    GameOver,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut settings = match load_settings() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Warning: {error}; using default settings");
            Settings::default()
        }
    };

    if let Some(requested) = &cli.theme {
        match theme_by_name(requested) {
            Some(theme) => settings.theme = theme.name.to_owned(),
            None => {
                let known: Vec<&str> = THEMES.iter().map(|theme| theme.name).collect();
                eprintln!(
                    "Unknown theme '{requested}'; available: {}",
                    known.join(", ")
                );
                return Ok(());
            }
        }
    }

    install_panic_hook();
    run(cli.seed, settings)
}

fn run(seed: Option<u64>, mut settings: Settings) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    let bounds = GridSize {
        width: DEFAULT_GRID_WIDTH,
        height: DEFAULT_GRID_HEIGHT,
    };
    let mut round = match seed {
        Some(seed) => GameRound::new_with_seed(bounds, seed),
        None => GameRound::new(bounds),
    };

    let mut scene = Scene::Start;
    let mut session_best: u32 = 0;
    let mut theme_index = THEMES
        .iter()
        .position(|theme| theme.name == settings.resolve_theme().name)
        .unwrap_or(0);
    let mut last_tick = Instant::now();
    let mut level_flash_started_at: Option<Instant> = None;

    loop {
        let theme = &THEMES[theme_index];
        let info = HudInfo {
            theme,
            session_best,
            now: Instant::now(),
            level_flash_started_at,
        };

        session.terminal_mut().draw(|frame| {
            renderer::render(frame, &round, &info);
            let area = frame.area();
            match scene {
                Scene::Start => render_start_menu(frame, area, session_best, theme),
                Scene::Paused => render_pause_menu(frame, area, theme),
                Scene::GameOver => render_game_over_menu(
                    frame,
                    area,
                    round.score(),
                    session_best,
                    round.death_reason(),
                    theme,
                ),
                Scene::Playing => {}
            }
        })?;

        if let Some(event) = input.poll_input()? {
            scene = match (scene, event) {
                (_, GameInput::Quit) => break,
                (Scene::Start | Scene::GameOver, GameInput::Confirm) => {
                    round.reset();
                    level_flash_started_at = None;
                    last_tick = Instant::now();
                    Scene::Playing
                }
                (Scene::Start | Scene::GameOver, GameInput::CycleTheme) => {
                    theme_index = (theme_index + 1) % THEMES.len();
                    settings.theme = THEMES[theme_index].name.to_owned();
                    if let Err(error) = save_settings(&settings) {
                        eprintln!("Failed to save settings: {error}");
                    }
                    scene
                }
                (Scene::Playing, GameInput::Direction(direction)) => {
                    round.snake.set_direction(direction);
                    Scene::Playing
                }
                (Scene::Playing, GameInput::Pause) => Scene::Paused,
                (Scene::Paused, GameInput::Pause | GameInput::Confirm) => {
                    // Resume from the exact same simulation state.
                    last_tick = Instant::now();
                    Scene::Playing
                }
                (unchanged, _) => unchanged,
            };
        }

        if scene == Scene::Playing && last_tick.elapsed() >= round.tick_interval() {
            match round.tick() {
                TickOutcome::Moved => {}
                TickOutcome::Ate => {
                    session_best = session_best.max(round.score());
                }
                TickOutcome::LeveledUp => {
                    session_best = session_best.max(round.score());
                    level_flash_started_at = Some(Instant::now());
                }
                TickOutcome::GameOver => {
                    session_best = session_best.max(round.score());
                    scene = Scene::GameOver;
                }
            }
            last_tick = Instant::now();
        }

        thread::sleep(FRAME_INTERVAL);
    }

    Ok(())
}
