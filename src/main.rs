//! Flappy entry point
//!
//! Runs the scene headless with an autopilot feeding jump events, so the
//! whole loop (timing, collisions, scoring, persistence) can be watched in
//! the log. A windowed frontend supplies its own renderer, audio and prompt.
//!
//! Usage: `flappy [rounds]` (default 3). Settings are read from
//! `settings.json` in the working directory when present.

use std::path::Path;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded, never, unbounded};

use flappy::consts::*;
use flappy::platform::headless::{HeadlessRenderer, RoundLimit};
use flappy::platform::{Clock, FileStore, InputEvent};
use flappy::sim::Orientation;
use flappy::{Scene, Settings, World};

const DEFAULT_ROUNDS: u32 = 3;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Flappy (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> flappy::Result<()> {
    let rounds = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_ROUNDS);
    let settings = Settings::load(Path::new("settings.json"))?;

    let store = FileStore::new(&settings.high_score_path);
    let mut scene = Scene::new(
        &settings,
        Box::new(store),
        HeadlessRenderer::new(),
        flappy::audio::SilentAudio,
        RoundLimit::new(rounds),
    )?;

    let (tx, events) = unbounded();
    let (done_tx, done) = bounded::<()>(0);
    let world = scene.world();
    let period = settings.tick_period();
    let pilot = thread::spawn(move || autopilot(&world, &tx, &done, period));

    let clock = Clock::fixed(period);
    let result = scene.run(&clock, &events, &never());
    drop(done_tx);
    if pilot.join().is_err() {
        log::warn!("Autopilot panicked");
    }
    let summary = result?;

    log::info!(
        "Played {} rounds, best {} ({} ticks, {} late, slowest {:?})",
        summary.rounds,
        summary.best,
        summary.ticks.ticks,
        summary.ticks.late_ticks,
        summary.ticks.max_tick
    );
    Ok(())
}

/// Flap whenever the bird sinks below the middle of the next gap.
/// Stops once `done` closes or the scene stops listening.
fn autopilot(world: &World, tx: &Sender<InputEvent>, done: &Receiver<()>, period: Duration) {
    loop {
        match done.recv_timeout(period) {
            Err(RecvTimeoutError::Timeout) => {}
            _ => break,
        }

        let snap = world.snapshot();
        if !snap.bird.is_alive() || snap.bird.speed < 0.0 {
            continue;
        }

        let bird_x = snap.bird.pos.x;
        let margin = snap.bird.size.y * 1.5;
        let target = snap
            .pipes
            .iter()
            .find(|p| p.trailing_edge() >= bird_x)
            .map(|p| match p.orientation {
                Orientation::Floor => (p.height + margin).min(WORLD_HEIGHT - margin),
                Orientation::Ceiling => margin.max((WORLD_HEIGHT - p.height) / 2.0),
            })
            .unwrap_or(WORLD_HEIGHT / 2.0);

        if snap.bird.pos.y < target && tx.send(InputEvent::Jump).is_err() {
            break;
        }
    }
}
