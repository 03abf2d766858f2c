mod graphics;
mod keys;
mod state;
mod vertex;
mod widget;

use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use carousel3d::{CarouselConfig, CarouselController, CarouselError, Easing, Item, Viewpoint, ZoomMode};
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};

use crate::keys::{map_key, KeyAction};
use crate::state::AppState;
use crate::widget::CarouselView;

const FALLBACK_SIZE: (usize, usize) = (80, 24);

#[derive(Parser, Debug)]
#[command(version, about = "Browse a carousel of 3D wireframes in the terminal")]
struct Args {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of items in the carousel
    #[arg(long, default_value_t = 3)]
    items: usize,
    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,
    /// Which entity zoom moves: "item" or "viewpoint"
    #[arg(long)]
    zoom_mode: Option<ZoomMode>,
    /// Slide easing curve
    #[arg(long)]
    easing: Option<Easing>,
    /// Slide duration in seconds
    #[arg(long)]
    duration: Option<f64>,
    /// Start with the debug overlay shown
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn build_config(&self) -> Result<CarouselConfig, CarouselError> {
        let mut config = match &self.config {
            Some(path) => CarouselConfig::load(path)?,
            None => CarouselConfig::default(),
        };
        if let Some(zoom_mode) = self.zoom_mode {
            config.zoom_mode = zoom_mode;
        }
        if let Some(easing) = self.easing {
            config.easing = easing;
        }
        if let Some(duration) = self.duration {
            config.transition_duration = duration;
        }
        Ok(config)
    }
}

/// Puts the terminal back the way it was when dropped
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn terminal_size() -> (usize, usize) {
    match termsize::get() {
        Some(size) if size.cols > 0 && size.rows > 0 => (size.cols as usize, size.rows as usize),
        _ => FALLBACK_SIZE,
    }
}

fn apply(action: KeyAction, controller: &mut CarouselController, state: &mut AppState) {
    match action {
        KeyAction::Intent(intent) => {
            let outcome = controller.handle(intent);
            debug!("{intent:?} -> {outcome:?}");
        }
        KeyAction::Recenter => {
            controller.recenter();
        }
        KeyAction::TogglePause => state.paused = !state.paused,
        KeyAction::ToggleDebug => state.debug = !state.debug,
        KeyAction::Quit => state.quit = true,
    }
}

fn run(controller: &mut CarouselController, state: &mut AppState, fps: u32) -> io::Result<()> {
    let mut out = io::stdout();
    let _guard = TerminalGuard::enter(&mut out)?;
    let mut view = CarouselView::new();
    let frame_time = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
    let mut last_frame = Instant::now();

    while !state.quit {
        // Drain input until the next frame is due
        let deadline = last_frame + frame_time;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = map_key(&key) {
                        apply(action, controller, state);
                    }
                }
                Event::Resize(_, _) => execute!(out, Clear(ClearType::All))?,
                _ => {}
            }
            if state.quit {
                break;
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        if !state.paused {
            controller.tick(dt);
        }

        let (width, height) = terminal_size();
        view.draw(&mut out, controller, state, width, height)?;
    }

    out.flush()
}

fn main() -> Result<(), CarouselError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.build_config()?;
    let items = (0..args.items).map(|i| Item::new(format!("item-{i}"))).collect();
    let mut controller = CarouselController::new(items, Viewpoint::default(), config)?;
    let mut state = AppState {
        debug: args.debug,
        ..Default::default()
    };

    info!("starting carousel with {} items at {} fps", args.items, args.fps);
    run(&mut controller, &mut state, args.fps)?;
    Ok(())
}
