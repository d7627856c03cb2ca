//! Terminal Gestris runner (default binary).
//!
//! Driver loop: each tick polls the vision feed, feeds the translator, maps
//! any emitted command onto the engine, handles keyboard events, advances
//! gravity on a level-derived cadence, and renders.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use gestris::core::scoring::gravity_interval_ms;
use gestris::core::GameState;
use gestris::gesture::{GestureCommand, GestureTranslator, Point, TranslatorConfig};
use gestris::input::{handle_key_event, should_quit};
use gestris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use gestris::types::{GameAction, TICK_MS};
use gestris::vision::VisionFeed;

fn main() -> Result<()> {
    init_logging();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to the file named by GESTRIS_LOG; stdout belongs to the TUI.
fn init_logging() {
    let Ok(path) = std::env::var("GESTRIS_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gestris=info".into()),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    info!("gestris v{} starting", env!("CARGO_PKG_VERSION"));
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameState::new(seed);
    let mut translator = GestureTranslator::new(TranslatorConfig::from_env());
    let mut vision = VisionFeed::start_from_env()?;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    let mut snap = game.snapshot();

    let start = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut gravity_timer_ms: u32 = 0;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if action == GameAction::Reset {
                            translator.reset();
                        }
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            // Gesture channel: one translator poll, at most one command.
            // The timestamp is the frame's receipt time, not poll time.
            let (point, sampled_at) = match vision.as_mut().and_then(|feed| feed.try_latest()) {
                Some(frame) => {
                    let point = frame.point.map(|(nx, ny)| {
                        Point::new(
                            nx * translator.config().frame_width,
                            ny * translator.config().frame_height,
                        )
                    });
                    (point, frame.at.saturating_duration_since(start))
                }
                None => (None, start.elapsed()),
            };
            if let Some(command) = translator.translate(point, sampled_at) {
                debug!("gesture command: {}", command.as_str());
                game.apply_action(gesture_action(command));
            }

            // Gravity on the level-derived cadence.
            gravity_timer_ms += TICK_MS;
            if gravity_timer_ms >= gravity_interval_ms(game.level()) {
                gravity_timer_ms = 0;
                if !game.game_over() {
                    game.soft_drop_step();
                }
            }
        }
    }
}

/// Map a translator command onto the engine action it drives.
fn gesture_action(command: GestureCommand) -> GameAction {
    match command {
        GestureCommand::MoveLeft => GameAction::MoveLeft,
        GestureCommand::MoveRight => GameAction::MoveRight,
        GestureCommand::Rotate => GameAction::Rotate,
        GestureCommand::SoftDrop => GameAction::SoftDrop,
    }
}
